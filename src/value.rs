//! The typed values the parser produces.

use std::fmt;

/// A dictionary or parameter key: lowercase-alphanumeric, starting with
/// `lcalpha` or `*`, continuing with `_ - .` as well.
///
/// Every byte a valid key can contain is ASCII, so [`Key::as_str`] never
/// fails for a key this crate produced itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key<'a>(&'a [u8]);

impl<'a> Key<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    pub fn as_str(&self) -> &'a str {
        // SAFETY net not needed: `is_key_start`/`is_key_cont` only ever admit
        // ASCII bytes, so this is infallible for any `Key` this crate builds.
        std::str::from_utf8(self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({:?})", self.as_str())
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decimal's denominator. Always a power of ten up to three fractional
/// digits, per the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Denominator {
    Tenths = 10,
    Hundredths = 100,
    Thousandths = 1000,
}

impl Denominator {
    pub const fn value(self) -> i64 {
        self as u16 as i64
    }
}

/// A bare item or inner-list marker, borrowed from the original input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    Integer(i64),
    Decimal {
        numerator: i64,
        denominator: Denominator,
    },
    String {
        /// The raw payload between the quotes, escapes included as-is.
        bytes: &'a [u8],
        /// Set when the payload contains at least one `\"` or `\\` escape.
        escaped: bool,
    },
    Token(&'a [u8]),
    ByteSequence(&'a [u8]),
    Boolean(bool),
    /// Sentinel produced in place of a bare item when the grammar instead
    /// finds `(`, signalling the caller should drive [`crate::Parser::inner_list`]
    /// (or ignore it, in which case it is silently skipped).
    InnerList,
}

impl<'a> Value<'a> {
    /// The borrowed payload of a string, token, or byte-sequence value.
    ///
    /// Returns `None` for integers, decimals, booleans, and inner-list
    /// markers, which carry no borrowed bytes.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Value::String { bytes, .. } | Value::Token(bytes) | Value::ByteSequence(bytes) => {
                Some(bytes)
            }
            Value::Integer(_) | Value::Decimal { .. } | Value::Boolean(_) | Value::InnerList => {
                None
            }
        }
    }
}
