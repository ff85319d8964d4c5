//! An incremental, zero-copy parser for HTTP Structured Field Values
//! ([RFC 8941](https://www.rfc-editor.org/rfc/rfc8941)).
//!
//! The parser consumes a borrowed byte slice holding a single header
//! field value and surfaces its logical structure — a list, a
//! dictionary, or a bare item — to a caller that drives it one element
//! at a time through [`Parser`]. Every string, token, and byte-sequence
//! value borrows directly from the input; nothing is copied or
//! allocated unless the caller asks [`unescape`] or [`base64_decode`]
//! to materialize decoded bytes into a buffer it supplies.
//!
//! ```
//! use sfv::{Parser, Value};
//!
//! let mut parser = Parser::new(b"a=1, b=2");
//! let mut entries = Vec::new();
//! while let Some((key, value)) = parser.dict().unwrap() {
//!     entries.push((key.as_str().to_owned(), value));
//! }
//! assert_eq!(entries, [("a".into(), Value::Integer(1)), ("b".into(), Value::Integer(2))]);
//! ```
#![forbid(unsafe_code)]

mod base64;
mod classify;
mod cursor;
mod error;
mod parser;
mod scan;
mod state;
mod unescape;
mod value;

pub use base64::{base64_decode, Decoded};
pub use error::{Error, ErrorKind};
pub use parser::{Entry, Parser};
pub use unescape::{unescape, Unescaped};
pub use value::{Denominator, Key, Value};
