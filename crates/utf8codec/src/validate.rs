//! Well-formedness checks for UTF-8 byte sequences.
//!
//! Each unit is classified by its leading byte and then checked in a fixed
//! order, failing fast on the first violation:
//!
//! 1. every required trailing byte exists and has the `10xxxxxx` shape;
//! 2. the byte after the unit is not itself a continuation byte;
//! 3. the unit is not an overlong form of a shorter encoding;
//! 4. a 4-byte unit does not exceed `U+10FFFF`, and a surrogate is only
//!    accepted under [`SurrogatePolicy::Preserve`].

use crate::{
    CodecOptions, SurrogatePolicy, Utf8Class, Utf8Error, Utf8ErrorKind,
    class::{MAX_CODEPOINT, is_continuation, is_surrogate},
    decode::assemble,
};

/// Returns `true` if `bytes` is well-formed UTF-8.
///
/// Encoded surrogates are accepted; use a [`Utf8Codec`](crate::Utf8Codec)
/// with the default options to reject them.
///
/// ```rust
/// use utf8codec::is_valid_utf8;
///
/// assert!(is_valid_utf8(&[0x41, 0xC3, 0xA9, 0x00]));
/// assert!(!is_valid_utf8(&[0xC0, 0x80]));
/// ```
#[must_use]
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    validate(bytes).is_ok()
}

/// Checks that `bytes` is well-formed UTF-8, reporting the first violation.
///
/// # Errors
///
/// Returns a [`Utf8Error`] describing the first rejected unit.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    validate_with(bytes, CodecOptions::PERMISSIVE)
}

pub(crate) fn validate_with(bytes: &[u8], options: CodecOptions) -> Result<(), Utf8Error> {
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] < 0x80 {
            pos += 1;
            continue;
        }
        pos += check_unit(bytes, pos, options)?.len();
    }
    Ok(())
}

/// Checks the unit starting at `start` and returns its class.
///
/// `start` must be in bounds.
pub(crate) fn check_unit(
    bytes: &[u8],
    start: usize,
    options: CodecOptions,
) -> Result<Utf8Class, Utf8Error> {
    debug_assert!(start < bytes.len());
    let lead = bytes[start];
    let Some(class) = Utf8Class::from_leading_byte(lead) else {
        let kind = if is_continuation(lead) {
            Utf8ErrorKind::UnexpectedContinuation(lead)
        } else {
            Utf8ErrorKind::InvalidLeadingByte(lead)
        };
        return Err(Utf8Error::new(kind, start, start));
    };
    if class == Utf8Class::Ascii {
        return Ok(class);
    }

    let len = class.len();
    for offset in 1..len {
        match bytes.get(start + offset) {
            None => {
                return Err(Utf8Error::new(
                    Utf8ErrorKind::Truncated(class),
                    start,
                    bytes.len(),
                ));
            }
            Some(&byte) if !is_continuation(byte) => {
                return Err(Utf8Error::new(
                    Utf8ErrorKind::InvalidContinuation(byte),
                    start,
                    start + offset,
                ));
            }
            Some(_) => {}
        }
    }

    // The unit must end where its leader says it does.
    if let Some(&next) = bytes.get(start + len) {
        if is_continuation(next) {
            return Err(Utf8Error::new(
                Utf8ErrorKind::UnexpectedContinuation(next),
                start,
                start + len,
            ));
        }
    }

    let (b0, b1) = (bytes[start], bytes[start + 1]);
    let overlong = match class {
        Utf8Class::Ascii => false,
        Utf8Class::TwoByte => b0 & 0x1E == 0,
        Utf8Class::ThreeByte => b0 & 0x0F == 0 && b1 & 0x20 == 0,
        Utf8Class::FourByte => b0 & 0x07 == 0 && b1 & 0x30 == 0,
    };
    if overlong {
        return Err(Utf8Error::new(Utf8ErrorKind::Overlong(class), start, start));
    }

    let cp = assemble(&bytes[start..start + len], class);
    match class {
        Utf8Class::FourByte if cp > MAX_CODEPOINT => Err(Utf8Error::new(
            Utf8ErrorKind::OutOfRange(cp),
            start,
            start,
        )),
        Utf8Class::ThreeByte
            if is_surrogate(cp) && options.surrogates == SurrogatePolicy::Reject =>
        {
            Err(Utf8Error::new(Utf8ErrorKind::Surrogate(cp), start, start))
        }
        _ => Ok(class),
    }
}
