#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use jot::{sign, verify, Algorithm, JsonObject};
use serde_json::json;

fn bench_payload() -> JsonObject {
    let mut payload = JsonObject::new();
    payload.insert("sub".to_string(), json!("bench:user"));
    payload.insert("scopes".to_string(), json!(["read", "write", "admin"]));
    payload.insert("count".to_string(), json!(1024));
    payload
}

fn bench_algorithm(c: &mut Criterion, algorithm: Algorithm, label: &str) {
    let secret = vec![0xab_u8; algorithm.secret_len().expect("hmac secret length")];
    let payload = bench_payload();
    let token = sign(&payload, &secret, algorithm).expect("sign");

    c.bench_function(&format!("{label}_sign"), |b| {
        b.iter(|| sign(&payload, &secret, algorithm).expect("sign"));
    });
    c.bench_function(&format!("{label}_verify"), |b| {
        b.iter(|| verify(&token, &secret).expect("verify"));
    });
}

fn bench_hmac_family(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Hs256, "hs256");
    bench_algorithm(c, Algorithm::Hs384, "hs384");
    bench_algorithm(c, Algorithm::Hs512, "hs512");
}

fn bench_codec(c: &mut Criterion) {
    let data = vec![0x5a_u8; 512];
    let encoded = jot::base64url::encode_bytes(&data);

    c.bench_function("base64url_encode_512b", |b| {
        b.iter(|| jot::base64url::encode_bytes(&data));
    });
    c.bench_function("base64url_decode_512b", |b| {
        b.iter(|| jot::base64url::decode_bytes(&encoded).expect("decode"));
    });
}

criterion_group!(benches, bench_hmac_family, bench_codec);
criterion_main!(benches);
