use core::{fmt, iter::FusedIterator};

use bstr::BStr;

use crate::{
    CodecError, CodecOptions, Utf8Class,
    class::{CONTINUATION_PAYLOAD, is_continuation},
    validate::{check_unit, validate_with},
};

/// Rebuilds the code point of one complete unit.
///
/// The leader contributes the most significant bits, each continuation byte
/// six more. The result is not range checked.
#[inline]
pub(crate) fn assemble(unit: &[u8], class: Utf8Class) -> i32 {
    debug_assert_eq!(unit.len(), class.len());
    let lead = i32::from(unit[0] & class.leader_payload());
    unit[1..].iter().fold(lead, |cp, &byte| {
        debug_assert!(is_continuation(byte));
        (cp << 6) | i32::from(byte & CONTINUATION_PAYLOAD)
    })
}

/// Decodes every code point in `bytes`.
///
/// The whole input is validated before anything is decoded; encoded
/// surrogates are accepted.
///
/// ```rust
/// use utf8codec::decode_codepoints;
///
/// let cps: Vec<i32> = decode_codepoints("Aé".as_bytes()).unwrap().collect();
/// assert_eq!(cps, [0x41, 0xE9]);
/// ```
///
/// # Errors
///
/// [`CodecError::InvalidEncoding`] if `bytes` is not well-formed, or
/// [`CodecError::OutOfRange`] if a 4-byte unit exceeds `U+10FFFF`.
pub fn decode_codepoints(bytes: &[u8]) -> Result<CodePoints<'_>, CodecError> {
    decode_codepoints_with(bytes, CodecOptions::PERMISSIVE)
}

pub(crate) fn decode_codepoints_with(
    bytes: &[u8],
    options: CodecOptions,
) -> Result<CodePoints<'_>, CodecError> {
    validate_with(bytes, options).map_err(CodecError::from_validation)?;
    Ok(CodePoints { bytes })
}

/// Decodes the first code point of `bytes` and returns it with its encoded
/// length.
///
/// Only the first unit is validated, together with the byte that follows it.
/// Returns `Ok(None)` if `bytes` is empty.
///
/// ```rust
/// use utf8codec::decode_codepoint;
///
/// assert_eq!(decode_codepoint(&[0xE2, 0x82, 0xAC, 0xFF]).unwrap(), Some((0x20AC, 3)));
/// assert_eq!(decode_codepoint(&[]).unwrap(), None);
/// ```
///
/// # Errors
///
/// See [`decode_codepoints`].
pub fn decode_codepoint(bytes: &[u8]) -> Result<Option<(i32, usize)>, CodecError> {
    decode_codepoint_with(bytes, CodecOptions::PERMISSIVE)
}

pub(crate) fn decode_codepoint_with(
    bytes: &[u8],
    options: CodecOptions,
) -> Result<Option<(i32, usize)>, CodecError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    let class = check_unit(bytes, 0, options).map_err(CodecError::from_validation)?;
    let len = class.len();
    Ok(Some((assemble(&bytes[..len], class), len)))
}

/// Lazy iterator over the code points of a validated byte slice.
///
/// Created by [`decode_codepoints`] or [`Utf8Codec::decode`]. It is single
/// pass: to start over, decode the original bytes again.
///
/// [`Utf8Codec::decode`]: crate::Utf8Codec::decode
pub struct CodePoints<'a> {
    bytes: &'a [u8],
}

impl<'a> CodePoints<'a> {
    /// The bytes that have not been decoded yet.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl Iterator for CodePoints<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let &lead = self.bytes.first()?;
        let class = Utf8Class::from_leading_byte(lead);
        debug_assert!(class.is_some(), "validated input starts with a leader");
        let Some(class) = class.filter(|class| class.len() <= self.bytes.len()) else {
            self.bytes = &[];
            return None;
        };
        let (unit, rest) = self.bytes.split_at(class.len());
        self.bytes = rest;
        let cp = assemble(unit, class);
        debug_assert!(cp >= class.min_codepoint());
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bytes.len();
        (len.div_ceil(4), Some(len))
    }
}

impl FusedIterator for CodePoints<'_> {}

impl fmt::Debug for CodePoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodePoints")
            .field("remaining", &BStr::new(self.bytes))
            .finish()
    }
}
