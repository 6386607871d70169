use alloc::vec::Vec;
use core::{fmt, ops::Deref};

use bstr::BStr;

use crate::{
    CodecError, CodecOptions, SurrogatePolicy, Utf8Class,
    class::{CONTINUATION_PAYLOAD, CONTINUATION_TAG, is_surrogate},
};

/// The UTF-8 encoding of one code point, stored inline.
///
/// Dereferences to the encoded bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedCodePoint {
    buf: [u8; 4],
    len: u8,
}

impl EncodedCodePoint {
    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }

    /// The class the code point was encoded as.
    #[must_use]
    pub fn class(&self) -> Utf8Class {
        match self.len {
            1 => Utf8Class::Ascii,
            2 => Utf8Class::TwoByte,
            3 => Utf8Class::ThreeByte,
            _ => Utf8Class::FourByte,
        }
    }
}

impl Deref for EncodedCodePoint {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedCodePoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedCodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.as_bytes()), f)
    }
}

/// Encodes `cp` as UTF-8.
///
/// ```rust
/// use utf8codec::encode_codepoint;
///
/// assert_eq!(&*encode_codepoint(0xE9).unwrap(), &[0xC3, 0xA9]);
/// assert!(encode_codepoint(0x11_0000).is_err());
/// ```
///
/// # Errors
///
/// [`CodecError::OutOfRange`] if `cp` is negative or above `U+10FFFF`, and
/// [`CodecError::Surrogate`] if `cp` is in `U+D800..=U+DFFF`.
pub fn encode_codepoint(cp: i32) -> Result<EncodedCodePoint, CodecError> {
    encode_codepoint_with(cp, CodecOptions::STRICT)
}

/// Appends the UTF-8 encoding of `cp` to `dst` and returns the number of
/// bytes written. `dst` is left untouched on error.
///
/// # Errors
///
/// See [`encode_codepoint`].
pub fn encode_codepoint_into(cp: i32, dst: &mut Vec<u8>) -> Result<usize, CodecError> {
    encode_codepoint_into_with(cp, dst, CodecOptions::STRICT)
}

/// Encodes a sequence of code points into a new buffer.
///
/// Fails on the first code point that cannot be encoded; no partial output
/// is returned.
///
/// # Errors
///
/// See [`encode_codepoint`].
pub fn encode_codepoints<I>(cps: I) -> Result<Vec<u8>, CodecError>
where
    I: IntoIterator<Item = i32>,
{
    encode_codepoints_with(cps, CodecOptions::STRICT)
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_codepoint_with(
    cp: i32,
    options: CodecOptions,
) -> Result<EncodedCodePoint, CodecError> {
    let class = Utf8Class::from_codepoint(cp).ok_or(CodecError::OutOfRange(i64::from(cp)))?;
    if is_surrogate(cp) && options.surrogates == SurrogatePolicy::Reject {
        return Err(CodecError::Surrogate(cp));
    }

    // `cp` is non-negative and at most 21 bits wide here.
    let bits = cp.unsigned_abs();
    let len = class.len();
    let mut buf = [0u8; 4];
    let lead_shift = 6 * (len - 1);
    buf[0] = class.leader_tag() | ((bits >> lead_shift) as u8 & class.leader_payload());
    for (i, slot) in buf.iter_mut().enumerate().take(len).skip(1) {
        let shift = 6 * (len - 1 - i);
        *slot = CONTINUATION_TAG | ((bits >> shift) as u8 & CONTINUATION_PAYLOAD);
    }
    Ok(EncodedCodePoint {
        buf,
        len: len as u8,
    })
}

pub(crate) fn encode_codepoint_into_with(
    cp: i32,
    dst: &mut Vec<u8>,
    options: CodecOptions,
) -> Result<usize, CodecError> {
    let encoded = encode_codepoint_with(cp, options)?;
    dst.extend_from_slice(&encoded);
    Ok(encoded.len())
}

pub(crate) fn encode_codepoints_with<I>(cps: I, options: CodecOptions) -> Result<Vec<u8>, CodecError>
where
    I: IntoIterator<Item = i32>,
{
    let cps = cps.into_iter();
    let mut out = Vec::with_capacity(cps.size_hint().0);
    for cp in cps {
        encode_codepoint_into_with(cp, &mut out, options)?;
    }
    Ok(out)
}
