//! Quoted-string bare-item scanner.

use crate::classify::is_quoted_printable;
use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::value::Value;

/// Scans a quoted string starting at `"`.
///
/// The payload slice returned is the content strictly between the quotes,
/// with any `\"`/`\\` escapes left exactly as written — unescaping is the
/// caller's job via [`crate::unescape`], invoked only when actually needed.
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>) -> Result<Value<'a>, Error> {
    debug_assert_eq!(cursor.peek(), Some(b'"'));
    cursor.bump();

    let start = cursor.pos();
    let mut escaped = false;

    loop {
        let Some(b) = cursor.peek() else {
            return Err(Error::new(cursor.pos(), ErrorKind::UnterminatedString));
        };

        if b == b'"' {
            let bytes = cursor.slice_from(start);
            cursor.bump();
            return Ok(Value::String { bytes, escaped });
        }

        if b == b'\\' {
            cursor.bump();
            match cursor.peek() {
                Some(b'"' | b'\\') => {
                    escaped = true;
                    cursor.bump();
                }
                _ => return Err(Error::new(cursor.pos(), ErrorKind::InvalidEscape)),
            }
            continue;
        }

        if is_quoted_printable(b) {
            cursor.bump();
            continue;
        }

        return Err(Error::new(cursor.pos(), ErrorKind::UnexpectedByte(b)));
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
    fn plain_string_is_not_escaped() {
        let v = scan_all(br#""hello""#).unwrap();
        assert_eq!(v, Value::String { bytes: b"hello", escaped: false });
    }

    #[test]
    fn escaped_quote_sets_the_flag() {
        let v = scan_all(br#""hello \"world\"""#).unwrap();
        assert_eq!(
            v,
            Value::String {
                bytes: br#"hello \"world\""#,
                escaped: true
            }
        );
    }

    #[test]
    fn escaped_backslash_is_accepted() {
        let v = scan_all(br#""a\\b""#).unwrap();
        assert_eq!(v, Value::String { bytes: br"a\\b", escaped: true });
    }

    #[test]
    fn bad_escape_is_an_error() {
        assert_eq!(scan_all(br#""a\qb""#).unwrap_err().kind, ErrorKind::InvalidEscape);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(scan_all(br#""abc"#).unwrap_err().kind, ErrorKind::UnterminatedString);
    }

    #[test]
    fn control_byte_is_rejected() {
        assert_eq!(
            scan_all(b"\"a\x01b\"").unwrap_err().kind,
            ErrorKind::UnexpectedByte(0x01)
        );
    }
}
