#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use sfv::{base64_decode, unescape, Unescaped};

fn base64_alphabet_byte() -> impl Strategy<Value = u8> {
    prop_oneof![b'A'..=b'Z', b'a'..=b'z', b'0'..=b'9', Just(b'+'), Just(b'/'),]
}

proptest! {
    /// The decoded length follows directly from the source length mod 4,
    /// regardless of which alphabet bytes are actually present.
    #[test]
    fn base64_decode_length_matches_source_length(
        bytes in prop::collection::vec(base64_alphabet_byte(), 0..64)
            .prop_filter("a byte-sequence payload is never 4n + 1 bytes", |v| v.len() % 4 != 1)
    ) {
        let mut dest = vec![0u8; bytes.len()];
        let decoded = base64_decode(&bytes, &mut dest);
        let expected_len = match bytes.len() % 4 {
            0 => bytes.len() / 4 * 3,
            2 => bytes.len() / 4 * 3 + 1,
            3 => bytes.len() / 4 * 3 + 2,
            _ => unreachable!(),
        };
        prop_assert_eq!(decoded.as_bytes().len(), expected_len);
    }

    /// A payload with no backslash is never copied.
    #[test]
    fn unescape_without_backslash_always_borrows(
        bytes in prop::collection::vec(0x20u8..=0x7e, 0..32)
            .prop_filter("must contain no backslash", |v| !v.contains(&b'\\'))
    ) {
        let unescaped = unescape(&bytes, &mut []);
        prop_assert_eq!(unescaped, Unescaped::Borrowed(bytes.as_slice()));
    }
}
