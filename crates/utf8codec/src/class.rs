/// The number of bytes a code point occupies in UTF-8.
///
/// A class is derived either from the high bits of a leading byte or from the
/// numeric range of a code point; both derivations agree for every well-formed
/// unit.
///
/// | Class       | Code points            | Leading byte |
/// |-------------|------------------------|--------------|
/// | `Ascii`     | `U+0000..=U+007F`      | `0xxxxxxx`   |
/// | `TwoByte`   | `U+0080..=U+07FF`      | `110xxxxx`   |
/// | `ThreeByte` | `U+0800..=U+FFFF`      | `1110xxxx`   |
/// | `FourByte`  | `U+10000..=U+10FFFF`   | `11110xxx`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utf8Class {
    /// US-ASCII, a single byte.
    Ascii,
    /// Latin supplements and other scripts up to `U+07FF`.
    TwoByte,
    /// The rest of the Basic Multilingual Plane.
    ThreeByte,
    /// The supplementary planes.
    FourByte,
}

/// Tag bits of a continuation byte (`10xxxxxx`).
pub(crate) const CONTINUATION_TAG: u8 = 0b1000_0000;
/// Mask selecting the tag bits of a continuation byte.
pub(crate) const CONTINUATION_TAG_MASK: u8 = 0b1100_0000;
/// Mask selecting the payload bits of a continuation byte.
pub(crate) const CONTINUATION_PAYLOAD: u8 = 0b0011_1111;

/// Largest Unicode code point.
pub const MAX_CODEPOINT: i32 = 0x10_FFFF;

/// Returns true if `byte` has the `10xxxxxx` shape.
#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_TAG_MASK == CONTINUATION_TAG
}

/// Returns true if `cp` lies in the UTF-16 surrogate range.
#[inline]
pub(crate) const fn is_surrogate(cp: i32) -> bool {
    matches!(cp, 0xD800..=0xDFFF)
}

impl Utf8Class {
    /// Classifies a leading byte by its high-bit pattern.
    ///
    /// Returns `None` for a stray continuation byte (`10xxxxxx`) and for the
    /// `11111xxx` patterns, neither of which may start a code point.
    #[inline]
    #[must_use]
    pub const fn from_leading_byte(byte: u8) -> Option<Self> {
        if byte & 0x80 == 0x00 {
            Some(Self::Ascii)
        } else if byte & 0xE0 == 0xC0 {
            Some(Self::TwoByte)
        } else if byte & 0xF0 == 0xE0 {
            Some(Self::ThreeByte)
        } else if byte & 0xF8 == 0xF0 {
            Some(Self::FourByte)
        } else {
            None
        }
    }

    /// Classifies a code point by its numeric range.
    ///
    /// Surrogates are classified as [`Utf8Class::ThreeByte`]; whether they
    /// may be encoded is a policy decision made by the caller.
    #[must_use]
    pub const fn from_codepoint(cp: i32) -> Option<Self> {
        match cp {
            0x0000..=0x007F => Some(Self::Ascii),
            0x0080..=0x07FF => Some(Self::TwoByte),
            0x0800..=0xFFFF => Some(Self::ThreeByte),
            0x1_0000..=MAX_CODEPOINT => Some(Self::FourByte),
            _ => None,
        }
    }

    /// Total number of bytes in a unit of this class.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        match self {
            Self::Ascii => 1,
            Self::TwoByte => 2,
            Self::ThreeByte => 3,
            Self::FourByte => 4,
        }
    }

    /// Tag bits that mark a leading byte of this class.
    #[inline]
    pub(crate) const fn leader_tag(self) -> u8 {
        match self {
            Self::Ascii => 0b0000_0000,
            Self::TwoByte => 0b1100_0000,
            Self::ThreeByte => 0b1110_0000,
            Self::FourByte => 0b1111_0000,
        }
    }

    /// Mask selecting the payload bits of a leading byte of this class.
    #[inline]
    pub(crate) const fn leader_payload(self) -> u8 {
        match self {
            Self::Ascii => 0x7F,
            Self::TwoByte => 0x1F,
            Self::ThreeByte => 0x0F,
            Self::FourByte => 0x07,
        }
    }

    /// Smallest code point that needs this many bytes.
    #[inline]
    pub(crate) const fn min_codepoint(self) -> i32 {
        match self {
            Self::Ascii => 0x0000,
            Self::TwoByte => 0x0080,
            Self::ThreeByte => 0x0800,
            Self::FourByte => 0x1_0000,
        }
    }
}

impl core::fmt::Display for Utf8Class {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ascii => f.write_str("1-byte (U+0000..=U+007F)"),
            Self::TwoByte => f.write_str("2-byte (U+0080..=U+07FF)"),
            Self::ThreeByte => f.write_str("3-byte (U+0800..=U+FFFF)"),
            Self::FourByte => f.write_str("4-byte (U+10000..=U+10FFFF)"),
        }
    }
}
