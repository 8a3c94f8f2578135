use crate::number::JsonNumber;

/// The type of errors a [`JsonHandler`] callback may raise. Any error
/// returned from a callback aborts the parse immediately and is surfaced to
/// the caller unchanged as
/// [`ParserError::Handler`](crate::ParserError::Handler).
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A set of callbacks invoked by [`JsonParser`](crate::JsonParser) at the
/// structural landmarks of a JSON text.
///
/// Callbacks are invoked synchronously while the parser consumes input, in
/// document order. `begin`/`end` pairs bracket correctly and nest. Every
/// callback has a default no-op implementation, so a handler only needs to
/// implement the events it cares about.
///
/// ```
/// use saxson::{JsonHandler, JsonParser};
///
/// #[derive(Default)]
/// struct NullCounter {
///     nulls: usize,
/// }
///
/// impl JsonHandler for NullCounter {
///     fn on_null(&mut self) -> Result<(), saxson::HandlerError> {
///         self.nulls += 1;
///         Ok(())
///     }
/// }
///
/// let mut parser = JsonParser::new(NullCounter::default());
/// parser.write(br#"[null, null, 1]"#).unwrap();
/// parser.write_eof().unwrap();
/// assert_eq!(parser.handler.nulls, 2);
/// ```
pub trait JsonHandler {
    /// Called when a `{` opens an object.
    fn on_object_begin(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called when a `}` closes the innermost open object.
    fn on_object_end(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called when a `[` opens an array.
    fn on_array_begin(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called when a `]` closes the innermost open array.
    fn on_array_end(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called when the opening `"` of a string (value or object key) has
    /// been consumed. Object keys are reported through the same string
    /// callbacks as string values; the handler can tell them apart from the
    /// surrounding `on_object_begin`/`on_object_end` context.
    fn on_string_begin(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called zero or more times between [`on_string_begin`](Self::on_string_begin)
    /// and [`on_string_end`](Self::on_string_end) with a chunk of the string
    /// body. Concatenated in order, the pieces are exactly the raw bytes
    /// between the surrounding quotes.
    ///
    /// `piece` is a sub-slice of the input buffer currently being written
    /// and is only valid for the duration of the call; copy it if you need
    /// to keep it.
    ///
    /// Escape sequences are *not* decoded: a `\` is passed through as an
    /// ordinary content byte. String contents are not validated as UTF-8;
    /// only control bytes below 0x20 are rejected by the parser.
    fn on_string_piece(&mut self, piece: &[u8]) -> Result<(), HandlerError> {
        let _ = piece;
        Ok(())
    }

    /// Called when the closing `"` of a string has been consumed.
    fn on_string_end(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called exactly once per number literal, after its last byte.
    fn on_number(&mut self, number: JsonNumber) -> Result<(), HandlerError> {
        let _ = number;
        Ok(())
    }

    /// Called for the literal `true`.
    fn on_true(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called for the literal `false`.
    fn on_false(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Called for the literal `null`.
    fn on_null(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// The unit handler ignores every event; parsing into it is pure
/// validation.
impl JsonHandler for () {}
