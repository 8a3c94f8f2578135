use saxson::JsonParser;

#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        // feed in small chunks so buffer-boundary resumption is exercised
        let mut parser = JsonParser::new(());
        for chunk in data.chunks(7) {
            if parser.write(chunk).is_err() {
                return;
            }
        }
        let _ = parser.write_eof();
    });
}
