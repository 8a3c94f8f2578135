/// Options for [`JsonParser`](crate::JsonParser). Use [`JsonParserOptionsBuilder`]
/// to create instances of this struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptions {
    /// The maximum state stack depth
    pub(crate) max_depth: usize,
}

/// A builder for [`JsonParserOptions`]
///
/// ```rust
/// use saxson::options::JsonParserOptionsBuilder;
/// use saxson::JsonParser;
///
/// let mut parser = JsonParser::new_with_options(
///     (),
///     JsonParserOptionsBuilder::default()
///         .with_max_depth(64)
///         .build(),
/// );
/// parser.write(b"[[1], [2]]").unwrap();
/// parser.write_eof().unwrap();
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptionsBuilder {
    options: JsonParserOptions,
}

impl Default for JsonParserOptions {
    /// Returns default JSON parser options
    fn default() -> Self {
        Self { max_depth: 2048 }
    }
}

impl JsonParserOptions {
    /// Returns the maximum state stack depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl JsonParserOptionsBuilder {
    /// Set the maximum state stack depth. The stack grows by a handful of
    /// entries per nesting level, so this bounds how deeply objects and
    /// arrays may nest. Exceeding the limit raises
    /// [`ParserError::DepthExceeded`](crate::ParserError::DepthExceeded).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Create a new [`JsonParserOptions`] object
    pub fn build(self) -> JsonParserOptions {
        self.options
    }
}
