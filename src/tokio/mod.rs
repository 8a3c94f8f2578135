//! Feeding a [`JsonParser`] from asynchronous readers. Enable the `tokio`
//! feature to use this module.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::handler::JsonHandler;
use crate::parser::JsonParser;
use crate::read::ReadError;

/// Feed `parser` from an [`AsyncBufRead`] until the reader is exhausted,
/// then signal end of input. The asynchronous twin of
/// [`JsonParser::write_reader()`](crate::JsonParser::write_reader).
///
/// ```no_run
/// use saxson::JsonParser;
/// use tokio::fs::File;
/// use tokio::io::BufReader;
///
/// # async fn example() -> Result<(), saxson::ReadError> {
/// let file = File::open("data.json").await?;
/// let mut parser = JsonParser::new(());
/// saxson::tokio::write_reader(&mut parser, BufReader::new(file)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn write_reader<R, H>(
    parser: &mut JsonParser<H>,
    mut reader: R,
) -> Result<(), ReadError>
where
    R: AsyncBufRead + Unpin,
    H: JsonHandler,
{
    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            break;
        }
        let n = buf.len();
        parser.write(buf)?;
        reader.consume(n);
    }
    parser.write_eof()?;
    Ok(())
}
