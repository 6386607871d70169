/// How encoded UTF-16 surrogates (`U+D800..=U+DFFF`) are treated.
///
/// Surrogates are not Unicode scalar values, but their 3-byte encodings
/// (`ED A0 80..=ED BF BF`) are structurally well-formed. Preserving them gives
/// WTF-8 style behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurrogatePolicy {
    /// Reject surrogates when validating, decoding and encoding.
    #[default]
    Reject,
    /// Accept surrogates like any other 3-byte code point.
    Preserve,
}

/// Configuration options for a [`Utf8Codec`](crate::Utf8Codec).
///
/// # Examples
///
/// ```rust
/// use utf8codec::{CodecOptions, SurrogatePolicy, Utf8Codec};
///
/// let codec = Utf8Codec::new(CodecOptions {
///     surrogates: SurrogatePolicy::Preserve,
/// });
/// assert!(codec.is_valid(&[0xED, 0xA0, 0x80]));
/// assert_eq!(&*codec.encode(0xD800).unwrap(), &[0xED, 0xA0, 0x80]);
/// ```
///
/// # Default
///
/// Surrogates are rejected, so the default codec accepts exactly what
/// [`core::str::from_utf8`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecOptions {
    /// Treatment of encoded surrogates in both directions.
    ///
    /// # Default
    ///
    /// [`SurrogatePolicy::Reject`]
    pub surrogates: SurrogatePolicy,
}

impl CodecOptions {
    /// Options used by the free validation and decoding functions: every
    /// structurally well-formed unit in range is accepted.
    pub(crate) const PERMISSIVE: Self = Self {
        surrogates: SurrogatePolicy::Preserve,
    };

    /// Options used by the free encoding functions.
    pub(crate) const STRICT: Self = Self {
        surrogates: SurrogatePolicy::Reject,
    };
}
