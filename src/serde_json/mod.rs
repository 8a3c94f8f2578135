//! Parsing into a Serde JSON [`Value`]. Enable the `serde_json` feature to
//! use this module.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::handler::{HandlerError, JsonHandler};
use crate::number::JsonNumber;
use crate::parser::{JsonParser, ParserError};

/// An error that can happen when a parsed number has no representation as
/// a Serde JSON number (e.g. its magnitude exceeds the `f64` range)
#[derive(Error, Debug)]
#[error("number out of range of a JSON value")]
pub struct NumberOutOfRangeError;

enum Container {
    Object {
        map: Map<String, Value>,
        key: Option<String>,
    },
    Array(Vec<Value>),
}

/// A [`JsonHandler`] that assembles a Serde JSON [`Value`] from the event
/// stream. Strings are collected piece by piece, so the builder works with
/// input arriving in arbitrary chunks.
///
/// Inside an object, a string arriving while no member name is pending is
/// taken as the member name; everything else becomes a value of the
/// innermost open container.
///
/// A number maps to an integer when its folded exponent is zero and it is
/// not negative zero, and to an `f64` otherwise. `100` is the integer
/// `100`, while `1e2`, `10.0`, and `-0` are floats.
#[derive(Default)]
pub struct ValueBuilder {
    stack: Vec<Container>,
    string: Vec<u8>,
    result: Option<Value>,
}

impl ValueBuilder {
    pub fn new() -> Self {
        ValueBuilder::default()
    }

    /// The completed value, once a document has been fully parsed into the
    /// builder
    pub fn into_value(self) -> Option<Value> {
        self.result
    }

    fn put(&mut self, value: Value) -> Result<(), HandlerError> {
        match self.stack.last_mut() {
            Some(Container::Object { map, key }) => {
                // the grammar guarantees a member name is pending here
                if let Some(k) = key.take() {
                    map.insert(k, value);
                }
            }
            Some(Container::Array(items)) => items.push(value),
            None => self.result = Some(value),
        }
        Ok(())
    }
}

impl JsonHandler for ValueBuilder {
    fn on_object_begin(&mut self) -> Result<(), HandlerError> {
        self.stack.push(Container::Object {
            map: Map::new(),
            key: None,
        });
        Ok(())
    }

    fn on_object_end(&mut self) -> Result<(), HandlerError> {
        if let Some(Container::Object { map, .. }) = self.stack.pop() {
            self.put(Value::Object(map))?;
        }
        Ok(())
    }

    fn on_array_begin(&mut self) -> Result<(), HandlerError> {
        self.stack.push(Container::Array(vec![]));
        Ok(())
    }

    fn on_array_end(&mut self) -> Result<(), HandlerError> {
        if let Some(Container::Array(items)) = self.stack.pop() {
            self.put(Value::Array(items))?;
        }
        Ok(())
    }

    fn on_string_piece(&mut self, piece: &[u8]) -> Result<(), HandlerError> {
        self.string.extend_from_slice(piece);
        Ok(())
    }

    fn on_string_end(&mut self) -> Result<(), HandlerError> {
        let s = String::from_utf8(std::mem::take(&mut self.string))
            .map_err(|e| -> HandlerError { Box::new(e) })?;
        match self.stack.last_mut() {
            Some(Container::Object { key, .. }) if key.is_none() => {
                *key = Some(s);
                Ok(())
            }
            _ => self.put(Value::String(s)),
        }
    }

    fn on_number(&mut self, number: JsonNumber) -> Result<(), HandlerError> {
        // a folded exponent of zero means the digits stand on their own;
        // negative zero only has a float representation
        let integral =
            number.exponent() == 0 && !(number.is_negative() && number.mantissa() == 0);
        let n = if integral {
            if let Some(i) = number.to_integer::<i64>() {
                Number::from(i)
            } else if let Some(u) = number.to_integer::<u64>() {
                Number::from(u)
            } else {
                Number::from_f64(number.as_f64()).ok_or(NumberOutOfRangeError)?
            }
        } else {
            Number::from_f64(number.as_f64()).ok_or(NumberOutOfRangeError)?
        };
        self.put(Value::Number(n))
    }

    fn on_true(&mut self) -> Result<(), HandlerError> {
        self.put(Value::Bool(true))
    }

    fn on_false(&mut self) -> Result<(), HandlerError> {
        self.put(Value::Bool(false))
    }

    fn on_null(&mut self) -> Result<(), HandlerError> {
        self.put(Value::Null)
    }
}

/// Parse a byte slice into a Serde JSON [`Value`]
///
/// ```
/// use serde_json::json;
/// use saxson::serde_json::from_slice;
///
/// let json = r#"{"name": "Elvis"}"#.as_bytes();
/// let expected = json!({
///     "name": "Elvis"
/// });
/// let actual = from_slice(json).unwrap();
/// assert_eq!(expected, actual);
/// ```
///
/// Strings are taken verbatim: escape sequences are not decoded, and
/// invalid UTF-8 in a string surfaces as
/// [`ParserError::Handler`](crate::ParserError::Handler).
pub fn from_slice(v: &[u8]) -> Result<Value, ParserError> {
    let mut parser = JsonParser::new(ValueBuilder::new());
    parser.write(v)?;
    parser.write_eof()?;
    parser.handler.into_value().ok_or(ParserError::Syntax)
}
