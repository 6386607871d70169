//! Textual rendering of a hex code point as the bit pattern of its UTF-8
//! encoding, e.g. `"E9"` becomes `"1100001110101001"`.
//!
//! Only the 1- and 2-byte classes are rendered; the others are reported as
//! [`CodecError::UnsupportedInput`].

use alloc::{format, string::String};

use crate::{CodecError, HexError, Utf8Class, class::MAX_CODEPOINT};

const PREFIXES: [&str; 4] = ["U+", "u+", "0x", "0X"];

/// Parses a hexadecimal code point such as `"E9"`, `"U+00E9"` or `"0x1F600"`.
///
/// # Errors
///
/// [`CodecError::InvalidHex`] for an empty string or a non-hex character, and
/// [`CodecError::OutOfRange`] for values above `U+10FFFF`.
pub fn parse_hex_codepoint(hex: &str) -> Result<i32, CodecError> {
    let (skipped, digits) = PREFIXES
        .iter()
        .find_map(|prefix| hex.strip_prefix(prefix).map(|rest| (prefix.len(), rest)))
        .unwrap_or((0, hex));
    if digits.is_empty() {
        return Err(HexError::Empty.into());
    }

    let mut value: i64 = 0;
    for (offset, digit) in digits.char_indices() {
        let nibble = digit.to_digit(16).ok_or(HexError::InvalidDigit {
            digit,
            offset: skipped + offset,
        })?;
        value = value
            .saturating_mul(16)
            .saturating_add(i64::from(nibble));
    }

    i32::try_from(value)
        .ok()
        .filter(|cp| *cp <= MAX_CODEPOINT)
        .ok_or(CodecError::OutOfRange(value))
}

/// Renders the UTF-8 bit pattern of the code point spelled by `hex`.
///
/// ```rust
/// use utf8codec::decode_hex_codepoint_to_bit_string;
///
/// assert_eq!(decode_hex_codepoint_to_bit_string("41").unwrap(), "01000001");
/// assert_eq!(decode_hex_codepoint_to_bit_string("E9").unwrap(), "1100001110101001");
/// ```
///
/// # Errors
///
/// Everything [`parse_hex_codepoint`] reports, plus
/// [`CodecError::UnsupportedInput`] for code points above `U+07FF`.
pub fn decode_hex_codepoint_to_bit_string(hex: &str) -> Result<String, CodecError> {
    render_bit_string(parse_hex_codepoint(hex)?)
}

fn render_bit_string(cp: i32) -> Result<String, CodecError> {
    let class = Utf8Class::from_codepoint(cp).ok_or(CodecError::OutOfRange(i64::from(cp)))?;
    match class {
        Utf8Class::Ascii => Ok(format!("0{cp:07b}")),
        Utf8Class::TwoByte => Ok(format!("110{:05b}10{:06b}", cp >> 6, cp & 0x3F)),
        Utf8Class::ThreeByte | Utf8Class::FourByte => Err(CodecError::UnsupportedInput(class)),
    }
}
