#![no_main]
use jot::base64url::{decode_bytes, encode_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Encoding any bytes must decode back to the same bytes.
    let encoded = encode_bytes(data);
    let decoded = decode_bytes(&encoded).expect("encoder output must decode");
    assert_eq!(
        data,
        &decoded[..],
        "codec roundtrip mismatch: encode then decode produced different bytes"
    );

    // Strictness: anything that decodes must re-encode to itself, so no
    // two distinct strings decode to the same bytes.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(bytes) = decode_bytes(text) {
            assert_eq!(
                encode_bytes(&bytes),
                text,
                "decoder accepted a non-canonical encoding"
            );
        }
    }
});
