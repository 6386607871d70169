use thiserror::Error;

use crate::Utf8Class;

/// A rejected UTF-8 byte sequence.
///
/// `valid_up_to` is the offset of the first byte of the unit that failed;
/// every byte before it forms complete, valid units. `position` is the offset
/// of the byte that triggered the failure, which may lie inside or just after
/// that unit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte {position}")]
pub struct Utf8Error {
    pub(crate) kind: Utf8ErrorKind,
    pub(crate) valid_up_to: usize,
    pub(crate) position: usize,
}

impl Utf8Error {
    pub(crate) const fn new(kind: Utf8ErrorKind, valid_up_to: usize, position: usize) -> Self {
        Self {
            kind,
            valid_up_to,
            position,
        }
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> Utf8ErrorKind {
        self.kind
    }

    /// Length of the valid prefix of the input.
    #[must_use]
    pub const fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Offset of the offending byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Why a byte sequence was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utf8ErrorKind {
    /// A `10xxxxxx` byte where a leading byte was expected, including one
    /// that extends a unit past the length its leader declared.
    #[error("unexpected continuation byte {0:#04X}")]
    UnexpectedContinuation(u8),
    /// A `11111xxx` byte, which no UTF-8 unit may start with.
    #[error("invalid leading byte {0:#04X}")]
    InvalidLeadingByte(u8),
    /// A byte inside a multi-byte unit that is not `10xxxxxx`.
    #[error("expected continuation byte, found {0:#04X}")]
    InvalidContinuation(u8),
    /// The input ended before the unit was complete.
    #[error("truncated {0} sequence")]
    Truncated(Utf8Class),
    /// A well-formed unit whose value fits in a shorter form.
    #[error("overlong {0} encoding")]
    Overlong(Utf8Class),
    /// An encoded UTF-16 surrogate, rejected under
    /// [`SurrogatePolicy::Reject`](crate::SurrogatePolicy::Reject).
    #[error("encoded surrogate U+{0:04X}")]
    Surrogate(i32),
    /// A 4-byte unit whose value exceeds `U+10FFFF`.
    #[error("code point {0:#X} above U+10FFFF")]
    OutOfRange(i32),
}

/// A malformed hexadecimal code point.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// No digits after the optional prefix.
    #[error("empty hex string")]
    Empty,
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit '{digit}' at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Its byte offset in the input string.
        offset: usize,
    },
}

/// Any failure reported by the codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The bytes are not well-formed UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),
    /// A value outside the Unicode code space. Hex input too large for
    /// `i64` saturates at `i64::MAX`.
    #[error("code point {} is outside U+0000..=U+10FFFF", SignedHex(*.0))]
    OutOfRange(i64),
    /// A surrogate code point under the rejecting policy.
    #[error("code point U+{0:04X} is a surrogate")]
    Surrogate(i32),
    /// The bit-string renderer does not handle this class.
    #[error("unsupported input: {0} code points cannot be rendered")]
    UnsupportedInput(Utf8Class),
    /// The hex string could not be parsed.
    #[error("invalid hex code point: {0}")]
    InvalidHex(#[from] HexError),
}

impl CodecError {
    /// Lifts a validation failure, surfacing range violations as
    /// [`CodecError::OutOfRange`] and everything else as
    /// [`CodecError::InvalidEncoding`].
    pub(crate) fn from_validation(err: Utf8Error) -> Self {
        match err.kind {
            Utf8ErrorKind::OutOfRange(value) => Self::OutOfRange(i64::from(value)),
            _ => Self::InvalidEncoding(err),
        }
    }
}

struct SignedHex(i64);

impl core::fmt::Display for SignedHex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:#X}", self.0.unsigned_abs())
        } else {
            write!(f, "{:#X}", self.0)
        }
    }
}
