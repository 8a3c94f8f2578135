use saxson::{HandlerError, JsonHandler, JsonNumber};

struct Scope {
    object: bool,
    count: usize,
    key_pending: bool,
}

/// Demonstrates how you can use a [`JsonHandler`] to pretty-print a JSON
/// object or array. Note: this is not a perfect implementation of a
/// pretty-printer. The output could still be nicer.
pub struct PrettyPrinter {
    result: String,
    stack: Vec<Scope>,
    string: Vec<u8>,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        PrettyPrinter {
            result: String::new(),
            stack: vec![],
            string: vec![],
        }
    }

    pub fn get_result(&self) -> &str {
        &self.result
    }

    fn indent(&mut self) {
        for _ in 0..self.stack.len() {
            self.result.push_str("  ");
        }
    }

    /// Comma, newline and indentation in front of an array element or an
    /// object member
    fn slot_prefix(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            let first = top.count == 0;
            top.count += 1;
            if !first {
                self.result.push(',');
            }
            self.result.push('\n');
            self.indent();
        }
    }

    /// Emit the text of one value, prefixed appropriately for its position
    fn value(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(top) if top.object && !top.key_pending => {
                top.key_pending = true;
                self.result.push_str(text);
            }
            _ => {
                self.slot_prefix();
                self.result.push_str(text);
            }
        }
    }

    fn open(&mut self, object: bool) {
        self.value(if object { "{" } else { "[" });
        self.stack.push(Scope {
            object,
            count: 0,
            key_pending: object,
        });
    }

    fn close(&mut self, closer: &str) {
        if let Some(scope) = self.stack.pop() {
            if scope.count > 0 {
                self.result.push('\n');
                self.indent();
            }
        }
        self.result.push_str(closer);
    }
}

impl JsonHandler for PrettyPrinter {
    fn on_object_begin(&mut self) -> Result<(), HandlerError> {
        self.open(true);
        Ok(())
    }

    fn on_object_end(&mut self) -> Result<(), HandlerError> {
        self.close("}");
        Ok(())
    }

    fn on_array_begin(&mut self) -> Result<(), HandlerError> {
        self.open(false);
        Ok(())
    }

    fn on_array_end(&mut self) -> Result<(), HandlerError> {
        self.close("]");
        Ok(())
    }

    fn on_string_piece(&mut self, piece: &[u8]) -> Result<(), HandlerError> {
        self.string.extend_from_slice(piece);
        Ok(())
    }

    fn on_string_end(&mut self) -> Result<(), HandlerError> {
        let s = String::from_utf8(std::mem::take(&mut self.string))?;
        match self.stack.last_mut() {
            Some(top) if top.object && top.key_pending => {
                top.key_pending = false;
                self.slot_prefix();
                self.result.push('"');
                self.result.push_str(&s);
                self.result.push_str("\": ");
            }
            _ => self.value(&format!("\"{s}\"")),
        }
        Ok(())
    }

    fn on_number(&mut self, number: JsonNumber) -> Result<(), HandlerError> {
        if number.exponent() == 0 {
            let sign = if number.is_negative() { "-" } else { "" };
            self.value(&format!("{sign}{}", number.mantissa()));
        } else {
            let mut buf = dtoa::Buffer::new();
            let text = buf.format(number.as_f64()).to_string();
            self.value(&text);
        }
        Ok(())
    }

    fn on_true(&mut self) -> Result<(), HandlerError> {
        self.value("true");
        Ok(())
    }

    fn on_false(&mut self) -> Result<(), HandlerError> {
        self.value("false");
        Ok(())
    }

    fn on_null(&mut self) -> Result<(), HandlerError> {
        self.value("null");
        Ok(())
    }
}
