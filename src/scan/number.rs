//! Integer and decimal bare-item scanner.

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::value::{Denominator, Value};

/// Scans an integer or decimal starting at an optional `-` or a digit.
///
/// A single running digit count bounds both the plain-integer case (count
/// must stay `<= 15`) and the decimal case (the same count, now spanning
/// integer *and* fractional digits, must still stay `<= 15`), matching the
/// reference grammar's single `MAX(...,...)` digit budget.
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>) -> Result<Value<'a>, Error> {
    let sign: i64 = if cursor.peek() == Some(b'-') {
        cursor.bump();
        if cursor.is_eof() {
            return Err(Error::new(cursor.pos(), ErrorKind::EmptyNumber));
        }
        -1
    } else {
        1
    };

    let mut value: i64 = 0;
    let mut digits: u32 = 0;
    let mut fraction_start: Option<u32> = None;

    loop {
        let Some(b) = cursor.peek() else { break };

        if b.is_ascii_digit() {
            digits += 1;
            if digits > 15 {
                return Err(Error::new(cursor.pos(), ErrorKind::NumberTooLong));
            }
            value = value * 10 + i64::from(b - b'0');
            cursor.bump();
            continue;
        }

        if b == b'.' {
            if digits == 0 {
                return Err(Error::new(cursor.pos(), ErrorKind::EmptyNumber));
            }
            if fraction_start.is_some() {
                // A second '.': stop here, as the reference parser does,
                // and let whatever follows fail on its own terms.
                break;
            }
            if digits > 12 {
                return Err(Error::new(cursor.pos(), ErrorKind::DecimalIntegerPartTooLong));
            }
            fraction_start = Some(digits);
            cursor.bump();
            continue;
        }

        if digits == 0 {
            return Err(Error::new(cursor.pos(), ErrorKind::EmptyNumber));
        }
        break;
    }

    match fraction_start {
        None => Ok(Value::Integer(value * sign)),
        Some(fraction_start) => {
            let fraction_digits = digits - fraction_start;
            if fraction_digits == 0 {
                return Err(Error::new(cursor.pos(), ErrorKind::EmptyDecimalFraction));
            }
            if fraction_digits > 3 {
                return Err(Error::new(cursor.pos(), ErrorKind::DecimalFractionTooLong));
            }
            let denominator = match fraction_digits {
                1 => Denominator::Tenths,
                2 => Denominator::Hundredths,
                3 => Denominator::Thousandths,
                _ => unreachable!("bounded to 1..=3 above"),
            };
            Ok(Value::Decimal {
                numerator: value * sign,
                denominator,
            })
        }
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
    fn plain_integers() {
        assert_eq!(scan_all(b"123").unwrap(), Value::Integer(123));
        assert_eq!(scan_all(b"-98").unwrap(), Value::Integer(-98));
        assert_eq!(scan_all(b"0").unwrap(), Value::Integer(0));
    }

    #[test]
    fn decimal_12_345() {
        assert_eq!(
            scan_all(b"12.345").unwrap(),
            Value::Decimal {
                numerator: 12345,
                denominator: Denominator::Thousandths
            }
        );
    }

    #[test]
    fn negative_decimal() {
        assert_eq!(
            scan_all(b"-3.62").unwrap(),
            Value::Decimal {
                numerator: -362,
                denominator: Denominator::Hundredths
            }
        );
    }

    #[test]
    fn lone_minus_is_an_error() {
        assert_eq!(scan_all(b"-").unwrap_err().kind, ErrorKind::EmptyNumber);
    }

    #[test]
    fn trailing_dot_is_an_error() {
        assert_eq!(scan_all(b"1.").unwrap_err().kind, ErrorKind::EmptyDecimalFraction);
    }

    #[test]
    fn too_many_fraction_digits_is_an_error() {
        assert_eq!(
            scan_all(b"1.1234").unwrap_err().kind,
            ErrorKind::DecimalFractionTooLong
        );
    }

    #[test]
    fn too_many_integer_digits_before_dot_is_an_error() {
        assert_eq!(
            scan_all(b"1234567890123.4").unwrap_err().kind,
            ErrorKind::DecimalIntegerPartTooLong
        );
    }

    #[test]
    fn sixteen_digit_integer_is_an_error() {
        assert_eq!(
            scan_all(b"1234567890123456").unwrap_err().kind,
            ErrorKind::NumberTooLong
        );
    }

    #[test]
    fn fifteen_digit_integer_is_the_boundary() {
        assert_eq!(
            scan_all(b"999999999999999").unwrap(),
            Value::Integer(999_999_999_999_999)
        );
    }

    #[test]
    fn stops_before_non_number_byte() {
        let mut c = Cursor::new(b"42;x");
        let v = scan(&mut c).unwrap();
        assert_eq!(v, Value::Integer(42));
        assert_eq!(c.pos(), 2);
    }
}
