//! Bare-item scanners and their common dispatch.

mod boolean;
mod byte_sequence;
mod number;
mod string;
mod token;

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::value::Value;

/// Scans a single bare item, dispatching on its leading byte.
pub(crate) fn bare_item<'a>(cursor: &mut Cursor<'a>) -> Result<Value<'a>, Error> {
    match cursor.peek() {
        Some(b'"') => string::scan(cursor),
        Some(b'-') => number::scan(cursor),
        Some(b) if b.is_ascii_digit() => number::scan(cursor),
        Some(b':') => byte_sequence::scan(cursor),
        Some(b'?') => boolean::scan(cursor),
        Some(b) if crate::classify::is_token_start(b) => token::scan(cursor),
        Some(b) => Err(Error::new(cursor.pos(), ErrorKind::UnexpectedByte(b))),
        None => Err(Error::new(cursor.pos(), ErrorKind::UnexpectedEof)),
    }
}
