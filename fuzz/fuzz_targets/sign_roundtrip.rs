#![no_main]
use jot::{sign, verify, Algorithm, JsonObject};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any JSON object must sign and verify under every HMAC algorithm.
    let Ok(payload) = serde_json::from_slice::<JsonObject>(data) else {
        return;
    };
    for algorithm in [Algorithm::Hs256, Algorithm::Hs384, Algorithm::Hs512] {
        let token = sign(&payload, b"fuzz-secret", algorithm).expect("sign");
        let result = verify(&token, b"fuzz-secret").expect("verify");
        assert!(result.is_verified, "fresh signature must verify");
        assert_eq!(
            result.payload, payload,
            "claims changed across a sign/verify roundtrip"
        );
    }
});
