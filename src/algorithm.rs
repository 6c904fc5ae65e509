//! The algorithm registry: which signing algorithms exist and what each
//! one needs.
//!
//! The registry is a closed enum. Adding an algorithm means adding a
//! variant and its [`AlgorithmSpec`], which keeps name resolution, digest
//! selection, and secret sizing in one place.

use std::fmt;
use std::str::FromStr;

use crate::error::JotError;

/// Hash function backing an HMAC algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFunction {
    Sha256,
    Sha384,
    Sha512,
}

/// Static properties of a registered algorithm.
///
/// `hash` and `secret_len` are `None` for algorithms outside the
/// shared-secret family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSpec {
    /// Wire identifier, as it appears in the token header's `alg` field.
    pub name: &'static str,
    /// Digest used for HMAC signing and verification.
    pub hash: Option<HashFunction>,
    /// Generated secret size in bytes, twice the digest output size.
    pub secret_len: Option<usize>,
}

const HS256: AlgorithmSpec = AlgorithmSpec {
    name: "HS256",
    hash: Some(HashFunction::Sha256),
    secret_len: Some(64),
};

const HS384: AlgorithmSpec = AlgorithmSpec {
    name: "HS384",
    hash: Some(HashFunction::Sha384),
    secret_len: Some(96),
};

const HS512: AlgorithmSpec = AlgorithmSpec {
    name: "HS512",
    hash: Some(HashFunction::Sha512),
    secret_len: Some(128),
};

const NONE: AlgorithmSpec = AlgorithmSpec {
    name: "none",
    hash: None,
    secret_len: None,
};

/// A registered token algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// HMAC with SHA-256.
    #[default]
    Hs256,
    /// HMAC with SHA-384.
    Hs384,
    /// HMAC with SHA-512.
    Hs512,
    /// Unsigned. Tokens carry an empty signature segment and never verify.
    None,
}

impl Algorithm {
    /// Resolve a wire identifier to an algorithm. Case-sensitive: the HMAC
    /// family is upper-case, `none` is lower-case.
    pub fn from_name(name: &str) -> Result<Algorithm, JotError> {
        match name {
            "HS256" => Ok(Algorithm::Hs256),
            "HS384" => Ok(Algorithm::Hs384),
            "HS512" => Ok(Algorithm::Hs512),
            "none" => Ok(Algorithm::None),
            other => Err(JotError::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// Wire identifier written to the token header.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Static properties of this algorithm.
    pub fn spec(self) -> &'static AlgorithmSpec {
        match self {
            Algorithm::Hs256 => &HS256,
            Algorithm::Hs384 => &HS384,
            Algorithm::Hs512 => &HS512,
            Algorithm::None => &NONE,
        }
    }

    /// Digest for the shared-secret family, `None` otherwise.
    pub fn hash(self) -> Option<HashFunction> {
        self.spec().hash
    }

    /// Generated secret size in bytes, if this algorithm defines one.
    pub fn secret_len(self) -> Option<usize> {
        self.spec().secret_len
    }

    /// True for algorithms signed and verified with a single shared secret.
    pub fn uses_shared_secret(self) -> bool {
        matches!(self, Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512)
    }

    /// True for algorithms using a private/public key pair. Nothing in the
    /// registry is in this partition yet; RS* and ES* entries will be.
    pub fn uses_asymmetric_key(self) -> bool {
        false
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = JotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_every_registered_algorithm() {
        assert_eq!(Algorithm::from_name("HS256").unwrap(), Algorithm::Hs256);
        assert_eq!(Algorithm::from_name("HS384").unwrap(), Algorithm::Hs384);
        assert_eq!(Algorithm::from_name("HS512").unwrap(), Algorithm::Hs512);
        assert_eq!(Algorithm::from_name("none").unwrap(), Algorithm::None);
    }

    #[test]
    fn test_from_name_rejects_unknown_names() {
        assert!(matches!(
            Algorithm::from_name("HS999"),
            Err(JotError::UnsupportedAlgorithm(name)) if name == "HS999"
        ));
        assert!(Algorithm::from_name("").is_err());
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!(Algorithm::from_name("hs256").is_err());
        assert!(Algorithm::from_name("None").is_err());
    }

    #[test]
    fn test_spec_digest_and_secret_sizes() {
        assert_eq!(Algorithm::Hs256.hash(), Some(HashFunction::Sha256));
        assert_eq!(Algorithm::Hs384.hash(), Some(HashFunction::Sha384));
        assert_eq!(Algorithm::Hs512.hash(), Some(HashFunction::Sha512));
        assert_eq!(Algorithm::Hs256.secret_len(), Some(64));
        assert_eq!(Algorithm::Hs384.secret_len(), Some(96));
        assert_eq!(Algorithm::Hs512.secret_len(), Some(128));
        assert_eq!(Algorithm::None.hash(), None);
        assert_eq!(Algorithm::None.secret_len(), None);
    }

    #[test]
    fn test_capability_partitions_are_disjoint() {
        for algorithm in [Algorithm::Hs256, Algorithm::Hs384, Algorithm::Hs512] {
            assert!(algorithm.uses_shared_secret());
            assert!(!algorithm.uses_asymmetric_key());
        }
        assert!(!Algorithm::None.uses_shared_secret());
        assert!(!Algorithm::None.uses_asymmetric_key());
    }

    #[test]
    fn test_default_algorithm_is_hs256() {
        assert_eq!(Algorithm::default(), Algorithm::Hs256);
    }

    #[test]
    fn test_display_and_parse_roundtrip() {
        for algorithm in [
            Algorithm::Hs256,
            Algorithm::Hs384,
            Algorithm::Hs512,
            Algorithm::None,
        ] {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }
}
