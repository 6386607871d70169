use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{
    arbitrary::{Scalar, Utf8ish},
    quickcheck_tests,
};
use crate::{
    CodecOptions, MAX_CODEPOINT, SurrogatePolicy, Utf8Class, Utf8Codec, decode_codepoints,
    encode_codepoint, encode_codepoints, is_valid_utf8,
};

/// Every scalar value survives encode then decode, and agrees with `char`.
#[test]
#[cfg_attr(miri, ignore)]
fn every_scalar_roundtrips() {
    let mut buf = [0u8; 4];
    for cp in (0..=MAX_CODEPOINT).filter(|cp| !matches!(*cp, 0xD800..=0xDFFF)) {
        let encoded = encode_codepoint(cp).unwrap();
        let ch = char::from_u32(cp.unsigned_abs()).unwrap();
        assert_eq!(&*encoded, ch.encode_utf8(&mut buf).as_bytes(), "U+{cp:04X}");
        let decoded: Vec<i32> = decode_codepoints(&encoded).unwrap().collect();
        assert_eq!(decoded, [cp], "U+{cp:04X}");
    }
}

#[test]
fn every_surrogate_roundtrips_when_preserved() {
    let codec = Utf8Codec::new(CodecOptions {
        surrogates: SurrogatePolicy::Preserve,
    });
    for cp in 0xD800..=0xDFFF {
        let encoded = codec.encode(cp).unwrap();
        assert_eq!(encoded.class(), Utf8Class::ThreeByte);
        assert_eq!(codec.decode(&encoded).unwrap().collect::<Vec<_>>(), [cp]);
    }
}

/// Property: a sequence of scalars encodes to bytes that decode back to the
/// same sequence.
#[test]
fn sequence_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(cps: Vec<Scalar>) -> bool {
        let cps: Vec<i32> = cps.into_iter().map(|s| s.0).collect();
        let bytes = encode_codepoints(cps.iter().copied()).unwrap();
        is_valid_utf8(&bytes) && decode_codepoints(&bytes).unwrap().collect::<Vec<_>>() == cps
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<Scalar>) -> bool);
}

/// Property: accepted input decodes to one code point per unit with no
/// residual bytes, so re-encoding reproduces it exactly.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn accepted_input_has_no_residue(input: Utf8ish) -> bool {
    let preserve = Utf8Codec::new(CodecOptions {
        surrogates: SurrogatePolicy::Preserve,
    });
    match decode_codepoints(&input.0) {
        Ok(cps) => preserve.encode_all(cps).unwrap() == input.0,
        Err(_) => !is_valid_utf8(&input.0),
    }
}
