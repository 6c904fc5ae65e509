//! Secret provisioning for the shared-secret algorithm family.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::error::JotError;

/// Generate a fresh random secret for `algorithm`, returned as standard
/// padded base64.
///
/// Secrets are sized per the algorithm registry at twice the digest
/// output: 64 bytes for HS256, 96 for HS384, 128 for HS512. Algorithms
/// without a registered secret length (`none`) are rejected. The raw
/// bytes are zeroed once the encoded copy is built; callers that decode
/// the secret own its lifetime from there.
pub fn generate_secret(algorithm: Algorithm) -> Result<String, JotError> {
    let len = algorithm
        .secret_len()
        .ok_or_else(|| JotError::UnsupportedAlgorithm(algorithm.name().to_string()))?;

    let mut bytes = Zeroizing::new(vec![0_u8; len]);
    OsRng.fill_bytes(bytes.as_mut_slice());
    Ok(STANDARD.encode(bytes.as_slice()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sign::sign;
    use crate::verify::verify;
    use serde_json::json;

    #[test]
    fn test_secret_sizes_follow_the_registry() {
        let cases = [
            (Algorithm::Hs256, 64_usize),
            (Algorithm::Hs384, 96),
            (Algorithm::Hs512, 128),
        ];
        for (algorithm, expected_len) in cases {
            let secret = generate_secret(algorithm).unwrap();
            let decoded = STANDARD.decode(secret).unwrap();
            assert_eq!(decoded.len(), expected_len, "{algorithm} secret size");
        }
    }

    #[test]
    fn test_none_has_no_secret_length() {
        assert!(matches!(
            generate_secret(Algorithm::None),
            Err(JotError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_secrets_do_not_repeat() {
        let first = generate_secret(Algorithm::Hs256).unwrap();
        let second = generate_secret(Algorithm::Hs256).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_generated_secret_signs_and_verifies() {
        let encoded = generate_secret(Algorithm::Hs512).unwrap();
        let secret = STANDARD.decode(encoded).unwrap();
        let mut payload = crate::JsonObject::new();
        payload.insert("sub".to_string(), json!("provisioning-check"));
        let token = sign(&payload, &secret, Algorithm::Hs512).unwrap();
        assert!(verify(&token, &secret).unwrap().is_verified);
    }
}
