//! A strict UTF-8 codec over explicit-length byte slices.
//!
//! - [`is_valid_utf8`] / [`validate`] check well-formedness: continuation
//!   bytes, unit termination, overlong forms and the `U+10FFFF` ceiling.
//! - [`decode_codepoints`] validates and then lazily yields code points.
//! - [`encode_codepoint`] is the inverse.
//! - [`decode_hex_codepoint_to_bit_string`] renders the UTF-8 bit pattern of a
//!   hex code point, for the 1- and 2-byte classes.
//!
//! Malformed input is rejected as a whole; there is no lossy decoding.
//!
//! ```rust
//! use utf8codec::{decode_codepoints, encode_codepoint, is_valid_utf8};
//!
//! let bytes = [0x41, 0xC3, 0xA9];
//! assert!(is_valid_utf8(&bytes));
//! let cps: Vec<i32> = decode_codepoints(&bytes).unwrap().collect();
//! assert_eq!(cps, [0x41, 0xE9]);
//! assert_eq!(&*encode_codepoint(0xE9).unwrap(), &bytes[1..]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod class;
mod codec;
mod decode;
mod encode;
mod error;
mod hex;
mod options;
mod validate;

#[cfg(test)]
mod tests;

pub use class::{MAX_CODEPOINT, Utf8Class};
pub use codec::Utf8Codec;
pub use decode::{CodePoints, decode_codepoint, decode_codepoints};
pub use encode::{EncodedCodePoint, encode_codepoint, encode_codepoint_into, encode_codepoints};
pub use error::{CodecError, HexError, Utf8Error, Utf8ErrorKind};
pub use hex::{decode_hex_codepoint_to_bit_string, parse_hex_codepoint};
pub use options::{CodecOptions, SurrogatePolicy};
pub use validate::{is_valid_utf8, validate};
