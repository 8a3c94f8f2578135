use std::io::BufRead;

use thiserror::Error;

use crate::handler::JsonHandler;
use crate::parser::{JsonParser, ParserError};

/// An error that can happen while feeding a parser from a reader
#[derive(Error, Debug)]
pub enum ReadError {
    /// The reader failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The parser rejected the input
    #[error(transparent)]
    Parse(#[from] ParserError),
}

impl<H> JsonParser<H>
where
    H: JsonHandler,
{
    /// Feed the parser from a [`BufRead`] until the reader is exhausted,
    /// then signal end of input. This is useful if you want to parse JSON
    /// from a file or a network connection.
    ///
    /// Each internal buffer the reader yields is written as-is, so the
    /// parser sees the same chunk boundaries as the reader produces and
    /// never copies the data.
    ///
    /// ```
    /// use std::io::Cursor;
    /// use saxson::JsonParser;
    ///
    /// let mut parser = JsonParser::new(());
    /// parser
    ///     .write_reader(Cursor::new(br#"{"name": "Elvis"}"#))
    ///     .unwrap();
    /// ```
    pub fn write_reader<R>(&mut self, mut reader: R) -> Result<(), ReadError>
    where
        R: BufRead,
    {
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let n = buf.len();
            self.write(buf)?;
            reader.consume(n);
        }
        self.write_eof()?;
        Ok(())
    }
}
