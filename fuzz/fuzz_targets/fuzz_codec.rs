#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8codec::{
    CodecError, CodecOptions, SurrogatePolicy, Utf8Codec, decode_codepoint, decode_codepoints,
    encode_codepoint, is_valid_utf8,
};

#[derive(Debug, Arbitrary)]
enum Input {
    /// Raw bytes, checked against `core::str::from_utf8`.
    Bytes(Vec<u8>),
    /// Code points, checked for encode/decode round trips.
    CodePoints(Vec<i32>),
}

fn bytes(data: &[u8]) {
    let strict = Utf8Codec::default();
    let preserve = Utf8Codec::new(CodecOptions {
        surrogates: SurrogatePolicy::Preserve,
    });

    let std_result = core::str::from_utf8(data);
    assert_eq!(strict.is_valid(data), std_result.is_ok());
    if let Ok(text) = std_result {
        let ours: Vec<i32> = strict.decode(data).unwrap().collect();
        let theirs: Vec<i32> = text.chars().map(|c| c as i32).collect();
        assert_eq!(ours, theirs);
    }

    // Anything strict accepts, the free functions accept too.
    if strict.is_valid(data) {
        assert!(is_valid_utf8(data));
    }

    match decode_codepoints(data) {
        Ok(cps) => {
            let cps: Vec<i32> = cps.collect();
            assert_eq!(preserve.encode_all(cps.iter().copied()).unwrap(), data);

            let mut rest = data;
            for cp in cps {
                let (first, len) = decode_codepoint(rest).unwrap().unwrap();
                assert_eq!(first, cp);
                rest = &rest[len..];
            }
            assert!(rest.is_empty());
        }
        Err(CodecError::InvalidEncoding(e)) => {
            assert!(!is_valid_utf8(data));
            assert!(e.valid_up_to() <= e.position());
            assert!(is_valid_utf8(&data[..e.valid_up_to()]));
        }
        Err(CodecError::OutOfRange(_)) => assert!(!is_valid_utf8(data)),
        Err(e) => panic!("unexpected decode error: {e}"),
    }
}

fn codepoints(cps: &[i32]) {
    for &cp in cps {
        match encode_codepoint(cp) {
            Ok(encoded) => {
                let ch = char::from_u32(cp.unsigned_abs()).expect("encoded a scalar value");
                let mut buf = [0u8; 4];
                assert_eq!(&*encoded, ch.encode_utf8(&mut buf).as_bytes());
                assert_eq!(decode_codepoints(&encoded).unwrap().collect::<Vec<_>>(), [cp]);
            }
            Err(_) => assert!(u32::try_from(cp).ok().and_then(char::from_u32).is_none()),
        }
    }
}

fuzz_target!(|input: Input| match input {
    Input::Bytes(data) => bytes(&data),
    Input::CodePoints(cps) => codepoints(&cps),
});
