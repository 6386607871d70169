#![expect(missing_docs)]

use utf8codec::{
    CodecError, CodecOptions, SurrogatePolicy, Utf8Class, Utf8Codec, decode_codepoints,
    encode_codepoint, is_valid_utf8,
};

fn decode_all(bytes: &[u8]) -> Result<Vec<i32>, CodecError> {
    decode_codepoints(bytes).map(Iterator::collect)
}

#[test]
fn a_with_acute() {
    let bytes = [0x41, 0xC3, 0xA9, 0x00];
    assert!(is_valid_utf8(&bytes));
    assert_eq!(decode_all(&bytes).unwrap(), [0x41, 0xE9, 0x00]);
}

#[test]
fn overlong_ascii_is_rejected() {
    for lead in [0xC0, 0xC1] {
        for trail in 0x80..=0xBF {
            assert!(!is_valid_utf8(&[lead, trail]), "{lead:02X} {trail:02X}");
        }
    }
}

#[test]
fn truncated_runs_are_rejected() {
    for bytes in [
        &[0xC3][..],
        &[0xE2, 0x82],
        &[0xE2, 0x41, 0x41],
        &[0xF0, 0x9F, 0x98],
        &[0xF0, 0x9F, 0x41, 0x41],
    ] {
        assert!(!is_valid_utf8(bytes), "{bytes:02X?}");
        assert!(matches!(decode_all(bytes), Err(CodecError::InvalidEncoding(_))));
    }
}

#[test]
fn over_long_runs_are_rejected() {
    assert!(is_valid_utf8(&[0xF0, 0x9F, 0x98, 0x80]));
    assert!(!is_valid_utf8(&[0xF0, 0x9F, 0x98, 0x80, 0x80]));
}

#[test]
fn stray_continuation_is_rejected() {
    assert!(!is_valid_utf8(&[0x80]));
    assert!(!is_valid_utf8(&[0x80, 0x41]));
}

#[test]
fn boundary_lengths() {
    for (cp, len) in [
        (0x7F, 1),
        (0x80, 2),
        (0x7FF, 2),
        (0x800, 3),
        (0xFFFF, 3),
        (0x1_0000, 4),
        (0x10_FFFF, 4),
    ] {
        let encoded = encode_codepoint(cp).unwrap();
        assert_eq!(encoded.len(), len, "U+{cp:04X}");
        assert_eq!(decode_all(&encoded).unwrap(), [cp]);
    }
    assert_eq!(
        encode_codepoint(0x11_0000).unwrap_err(),
        CodecError::OutOfRange(0x11_0000)
    );
}

#[test]
fn leading_byte_and_range_classes_agree() {
    for cp in [0x0, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x1_0000, 0x10_FFFF] {
        let encoded = encode_codepoint(cp).unwrap();
        assert_eq!(
            Utf8Class::from_leading_byte(encoded[0]),
            Utf8Class::from_codepoint(cp)
        );
    }
    assert_eq!(Utf8Class::from_leading_byte(0x80), None);
    assert_eq!(Utf8Class::from_leading_byte(0xF8), None);
    assert_eq!(Utf8Class::from_codepoint(-1), None);
}

#[test]
fn codec_is_shareable_across_threads() {
    let codec = Utf8Codec::new(CodecOptions {
        surrogates: SurrogatePolicy::Preserve,
    });
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let bytes = codec.encode_all([0x41 + i, 0xD800 + i]).unwrap();
                codec.decode(&bytes).unwrap().collect::<Vec<_>>()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let i = i32::try_from(i).unwrap();
        assert_eq!(handle.join().unwrap(), [0x41 + i, 0xD800 + i]);
    }
}

#[cfg(feature = "serde")]
#[test]
fn options_serialize() {
    let options = CodecOptions {
        surrogates: SurrogatePolicy::Preserve,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"surrogates":"Preserve"}"#);
    assert_eq!(serde_json::from_str::<CodecOptions>(&json).unwrap(), options);
}
