//! Byte classifiers for the Structured Field Values grammar.
//!
//! Every predicate here operates on a single byte. There is no multibyte
//! handling anywhere in this crate: the grammar is defined over ASCII byte
//! classes, and a non-ASCII byte simply fails whichever classifier it is
//! checked against.

/// `SP` or `HTAB`.
#[inline]
pub const fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// `0`-`9`.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `a`-`z`.
#[inline]
pub const fn is_lcalpha(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// `a`-`z` or `A`-`Z`.
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// First byte of a key: `lcalpha` or `*`.
#[inline]
pub const fn is_key_start(b: u8) -> bool {
    is_lcalpha(b) || b == b'*'
}

/// Continuation byte of a key: `key-start`, a digit, or one of `_ - .`.
#[inline]
pub const fn is_key_cont(b: u8) -> bool {
    is_key_start(b) || is_digit(b) || matches!(b, b'_' | b'-' | b'.')
}

/// First byte of a token: `alpha` or `*`.
#[inline]
pub const fn is_token_start(b: u8) -> bool {
    is_alpha(b) || b == b'*'
}

/// Continuation byte of a token.
#[inline]
pub const fn is_token_cont(b: u8) -> bool {
    is_token_start(b)
        || is_digit(b)
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
                | b':'
                | b'/'
        )
}

/// Byte of the base64 alphabet: `A-Za-z0-9+/`.
#[inline]
pub const fn is_base64_char(b: u8) -> bool {
    is_alpha(b) || is_digit(b) || matches!(b, b'+' | b'/')
}

/// Printable byte allowed bare inside a quoted string, i.e. `0x20..=0x7e`
/// excluding `\` (`0x5c`) and `"` (`0x22`), which the string scanner handles
/// specially.
#[inline]
pub const fn is_quoted_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7e) && b != b'\\' && b != b'"'
}
