//! Token bare-item scanner.

use crate::classify::{is_token_cont, is_token_start};
use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::value::Value;

/// Scans a token starting at `token-start` (`alpha` or `*`).
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>) -> Result<Value<'a>, Error> {
    match cursor.peek() {
        Some(b) if is_token_start(b) => {}
        Some(b) => return Err(Error::new(cursor.pos(), ErrorKind::UnexpectedByte(b))),
        None => return Err(Error::new(cursor.pos(), ErrorKind::UnexpectedEof)),
    }

    let start = cursor.pos();
    cursor.bump();

    while let Some(b) = cursor.peek() {
        if !is_token_cont(b) {
            break;
        }
        cursor.bump();
    }

    Ok(Value::Token(cursor.slice_from(start)))
}
