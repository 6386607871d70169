use alloc::vec::Vec;

use crate::{
    CodePoints, CodecError, CodecOptions, EncodedCodePoint, Utf8Error,
    decode::{decode_codepoint_with, decode_codepoints_with},
    encode::{encode_codepoint_into_with, encode_codepoint_with, encode_codepoints_with},
    validate::validate_with,
};

/// A UTF-8 codec with a fixed [`CodecOptions`].
///
/// The free functions ([`is_valid_utf8`](crate::is_valid_utf8),
/// [`decode_codepoints`](crate::decode_codepoints),
/// [`encode_codepoint`](crate::encode_codepoint), ...) accept surrogates when
/// decoding and reject them when encoding. A codec applies one
/// [`SurrogatePolicy`](crate::SurrogatePolicy) in both directions, so that
/// whatever it encodes it also decodes.
///
/// ```rust
/// use utf8codec::Utf8Codec;
///
/// let codec = Utf8Codec::default();
/// let bytes = codec.encode_all([0x48, 0x1F600]).unwrap();
/// assert_eq!(bytes, "H😀".as_bytes());
/// assert_eq!(codec.decode(&bytes).unwrap().collect::<Vec<_>>(), [0x48, 0x1F600]);
/// assert!(!codec.is_valid(&[0xED, 0xA0, 0x80]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Codec {
    options: CodecOptions,
}

impl Utf8Codec {
    /// Creates a codec with the given options.
    #[must_use]
    pub const fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// The options this codec was built with.
    #[must_use]
    pub const fn options(&self) -> CodecOptions {
        self.options
    }

    /// Returns `true` if `bytes` is well-formed UTF-8.
    #[must_use]
    pub fn is_valid(&self, bytes: &[u8]) -> bool {
        self.validate(bytes).is_ok()
    }

    /// Checks `bytes`, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns a [`Utf8Error`] describing the first rejected unit.
    pub fn validate(&self, bytes: &[u8]) -> Result<(), Utf8Error> {
        validate_with(bytes, self.options)
    }

    /// Validates `bytes` and returns an iterator over its code points.
    ///
    /// # Errors
    ///
    /// See [`decode_codepoints`](crate::decode_codepoints).
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<CodePoints<'a>, CodecError> {
        decode_codepoints_with(bytes, self.options)
    }

    /// Decodes the first code point of `bytes` and its encoded length.
    ///
    /// # Errors
    ///
    /// See [`decode_codepoint`](crate::decode_codepoint).
    pub fn decode_first(&self, bytes: &[u8]) -> Result<Option<(i32, usize)>, CodecError> {
        decode_codepoint_with(bytes, self.options)
    }

    /// Encodes one code point.
    ///
    /// # Errors
    ///
    /// See [`encode_codepoint`](crate::encode_codepoint).
    pub fn encode(&self, cp: i32) -> Result<EncodedCodePoint, CodecError> {
        encode_codepoint_with(cp, self.options)
    }

    /// Appends the encoding of `cp` to `dst`, returning the bytes written.
    ///
    /// # Errors
    ///
    /// See [`encode_codepoint`](crate::encode_codepoint).
    pub fn encode_into(&self, cp: i32, dst: &mut Vec<u8>) -> Result<usize, CodecError> {
        encode_codepoint_into_with(cp, dst, self.options)
    }

    /// Encodes a sequence of code points into a new buffer.
    ///
    /// # Errors
    ///
    /// See [`encode_codepoint`](crate::encode_codepoint).
    pub fn encode_all<I>(&self, cps: I) -> Result<Vec<u8>, CodecError>
    where
        I: IntoIterator<Item = i32>,
    {
        encode_codepoints_with(cps, self.options)
    }
}
