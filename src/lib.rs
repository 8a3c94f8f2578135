//! # Saxson
//!
//! A push-based, incremental JSON parser.
//!
//! Saxson parses a JSON document from an arbitrary sequence of byte
//! buffers and reports structural events ([`JsonHandler`]) as it goes. The
//! input may be split at any byte boundary, including in the middle of
//! keywords, numbers, strings, and whitespace: when a buffer runs out the
//! parser suspends, and the next [`write()`](JsonParser::write) resumes
//! exactly where it left off. The document is never buffered, so memory
//! use is independent of input size (strings are handed out piecewise, and
//! numbers fold into a fixed-size accumulator).
//!
//! ## Examples
//!
//! ### Push-based parsing
//!
//! Implement [`JsonHandler`] for the events you care about and feed the
//! parser whenever bytes are available.
//!
//! ```
//! use saxson::{HandlerError, JsonHandler, JsonParser};
//!
//! #[derive(Default)]
//! struct Strings {
//!     current: Vec<u8>,
//!     strings: Vec<String>,
//! }
//!
//! impl JsonHandler for Strings {
//!     fn on_string_piece(&mut self, piece: &[u8]) -> Result<(), HandlerError> {
//!         self.current.extend_from_slice(piece);
//!         Ok(())
//!     }
//!
//!     fn on_string_end(&mut self) -> Result<(), HandlerError> {
//!         let s = String::from_utf8(std::mem::take(&mut self.current))?;
//!         self.strings.push(s);
//!         Ok(())
//!     }
//! }
//!
//! let json = br#"["Elvis", "Max"]"#;
//! let mut parser = JsonParser::new(Strings::default());
//!
//! // feed the input in arbitrarily small chunks
//! for chunk in json.chunks(5) {
//!     parser.write(chunk).unwrap();
//! }
//! parser.write_eof().unwrap();
//!
//! assert_eq!(parser.handler.strings, ["Elvis", "Max"]);
//! ```
//!
//! ### Parsing from a `BufReader`
//!
//! [`JsonParser::write_reader()`] feeds the parser from any
//! [`BufRead`](std::io::BufRead). This is useful if you want to parse JSON
//! from a file or a network connection. With the `tokio` feature enabled,
//! [`tokio::write_reader()`](crate::tokio::write_reader) does the same for
//! asynchronous readers.
//!
//! ```
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use saxson::JsonParser;
//!
//! let file = File::open("tests/fixtures/pass1.txt").unwrap();
//!
//! // the unit handler just validates
//! let mut parser = JsonParser::new(());
//! parser.write_reader(BufReader::new(file)).unwrap();
//! ```
//!
//! ### Parsing into a Serde JSON Value
//!
//! For testing and compatibility reasons, Saxson is able to parse a byte
//! slice into a [Serde JSON](https://github.com/serde-rs/json) Value.
//!
//! Heads up: You need to enable the `serde_json` feature for this.
//!
//! ```ignore
//! use saxson::serde_json::from_slice;
//!
//! let json = r#"{"name": "Elvis"}"#.as_bytes();
//! let value = from_slice(json).unwrap();
//!
//! assert!(value.is_object());
//! assert_eq!(value["name"], "Elvis");
//! ```
//!
//! However, if you find yourself doing this, you probably don't need an
//! incremental parser and your data seems to completely fit into memory.
//! In this case, you're most likely better off using Serde JSON directly.
//!
//! ## Conformance notes
//!
//! The grammar is that of RFC 7159, with two deliberate limitations:
//! escape sequences inside strings are passed through to the handler
//! undecoded (`\` is an ordinary content byte), and string contents are
//! not validated as UTF-8 (only unescaped control bytes are rejected).
//! One document per parser: trailing non-whitespace input after the
//! top-level value is a syntax error.
mod handler;
mod number;
pub mod options;
mod parser;
mod read;

#[cfg(feature = "serde_json")]
pub mod serde_json;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use handler::{HandlerError, JsonHandler};
pub use number::JsonNumber;
pub use parser::{ErrorCondition, JsonParser, ParserError};
pub use read::ReadError;
