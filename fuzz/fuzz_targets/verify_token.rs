#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, regardless of input.
    if let Ok(token) = std::str::from_utf8(data) {
        let _ = jot::verify(token, b"fuzz-secret");
        let _ = jot::decode_unverified(token);
    }
});
