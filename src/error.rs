//! Error types for token signing, verification, and codec operations.

use thiserror::Error;

/// Errors reported by signing, verification, and secret generation.
///
/// A signature that does not match is *not* an error; see
/// [`Verification::is_verified`](crate::Verification). These variants cover
/// inputs that cannot be processed at all.
#[derive(Error, Debug)]
pub enum JotError {
    /// Algorithm name is not in the registry.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Algorithm is registered but needs an asymmetric key pair, which is
    /// not implemented yet.
    #[error("algorithm {0} requires an asymmetric key pair, which is not supported")]
    AsymmetricUnsupported(&'static str),

    /// Token does not have the `header.payload.signature` shape.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// A segment is not valid unpadded base64url.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A decoded segment is not a JSON object.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// HMAC computation could not be set up.
    #[error("signing failed: {0}")]
    SigningFailed(String),
}
