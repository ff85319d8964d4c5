//! Boolean bare-item scanner.

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::value::Value;

/// Scans a boolean starting at `?`.
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>) -> Result<Value<'a>, Error> {
    debug_assert_eq!(cursor.peek(), Some(b'?'));
    cursor.bump();

    match cursor.peek() {
        Some(b'0') => {
            cursor.bump();
            Ok(Value::Boolean(false))
        }
        Some(b'1') => {
            cursor.bump();
            Ok(Value::Boolean(true))
        }
        Some(_) | None => Err(Error::new(cursor.pos(), ErrorKind::InvalidBoolean)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn scan_all(input: &[u8]) -> Result<Value<'_>, Error> {
        let mut c = Cursor::new(input);
        scan(&mut c)
    }

    #[test]
    fn question_zero_is_false() {
        assert_eq!(scan_all(b"?0").unwrap(), Value::Boolean(false));
    }

    #[test]
    fn question_one_is_true() {
        assert_eq!(scan_all(b"?1").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn question_two_is_an_error() {
        assert_eq!(scan_all(b"?2").unwrap_err().kind, ErrorKind::InvalidBoolean);
    }

    #[test]
    fn bare_question_is_an_error() {
        assert_eq!(scan_all(b"?").unwrap_err().kind, ErrorKind::InvalidBoolean);
    }
}
