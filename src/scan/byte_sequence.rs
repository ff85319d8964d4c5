//! Byte-sequence bare-item scanner.

use crate::classify::is_base64_char;
use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::value::Value;

/// Bytes that may precede a single `=` when the real payload length is `4n + 3`.
const PAD_ONE_PRECEDING: &[u8] = b"AEIMQUYcgkosw048";

/// Bytes that may precede the first of two `=` when the real payload length is `4n + 2`.
const PAD_TWO_PRECEDING: &[u8] = b"AQgw";

/// Scans a byte sequence starting at `:`.
///
/// The returned payload is the base64-alphabet content only: any `=`
/// padding and the closing `:` are excluded from the slice. [`crate::base64_decode`]
/// reconstructs the original byte count from the slice's length alone.
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>) -> Result<Value<'a>, Error> {
    debug_assert_eq!(cursor.peek(), Some(b':'));
    cursor.bump();

    let start = cursor.pos();

    loop {
        let Some(b) = cursor.peek() else {
            return Err(Error::new(cursor.pos(), ErrorKind::UnterminatedByteSequence));
        };

        if is_base64_char(b) {
            cursor.bump();
            continue;
        }

        if b == b':' {
            let payload = cursor.slice_from(start);
            if payload.len() % 4 != 0 {
                return Err(Error::new(cursor.pos(), ErrorKind::InvalidByteSequenceLength));
            }
            cursor.bump();
            return Ok(Value::ByteSequence(payload));
        }

        if b == b'=' {
            let payload = cursor.slice_from(start);
            return finish_padded(cursor, payload);
        }

        return Err(Error::new(cursor.pos(), ErrorKind::UnexpectedByte(b)));
    }
}

fn finish_padded<'a>(cursor: &mut Cursor<'a>, payload: &'a [u8]) -> Result<Value<'a>, Error> {
    let remainder = payload.len() % 4;
    let (expected_pads, preceding_set) = match remainder {
        2 => (2, PAD_TWO_PRECEDING),
        3 => (1, PAD_ONE_PRECEDING),
        _ => return Err(Error::new(cursor.pos(), ErrorKind::InvalidByteSequenceLength)),
    };

    let last = match payload.last() {
        Some(&b) => b,
        None => unreachable!("remainder > 0 implies non-empty payload"),
    };
    if !preceding_set.contains(&last) {
        return Err(Error::new(cursor.pos(), ErrorKind::InvalidBase64Padding));
    }

    for _ in 0..expected_pads {
        match cursor.peek() {
            Some(b'=') => cursor.bump(),
            Some(b) => return Err(Error::new(cursor.pos(), ErrorKind::UnexpectedByte(b))),
            None => return Err(Error::new(cursor.pos(), ErrorKind::UnterminatedByteSequence)),
        }
    }

    match cursor.peek() {
        Some(b':') => cursor.bump(),
        Some(b) => return Err(Error::new(cursor.pos(), ErrorKind::UnexpectedByte(b))),
        None => return Err(Error::new(cursor.pos(), ErrorKind::UnterminatedByteSequence)),
    }

    Ok(Value::ByteSequence(payload))
}
