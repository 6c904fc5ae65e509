//! Unpadded base64url segment codec, with a JSON-object layer on top.
//!
//! Token segments use the URL-safe alphabet (`-` and `_`) with trailing
//! `=` padding stripped. Decoding is strict: padding characters, foreign
//! characters, and non-canonical trailing bits are all rejected, so there
//! is exactly one valid encoding for any byte string.

use base64::Engine as _;

use crate::error::JotError;
use crate::JsonObject;

const B64: base64::engine::GeneralPurpose = base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Encode raw bytes as an unpadded base64url segment.
#[must_use]
pub fn encode_bytes(data: &[u8]) -> String {
    B64.encode(data)
}

/// Decode an unpadded base64url segment back to raw bytes.
pub fn decode_bytes(data: &str) -> Result<Vec<u8>, JotError> {
    B64.decode(data)
        .map_err(|e| JotError::MalformedEncoding(format!("invalid base64url segment: {e}")))
}

/// Serialize a JSON object and encode it as a segment.
pub fn encode_json(data: &JsonObject) -> Result<String, JotError> {
    let bytes = serde_json::to_vec(data)
        .map_err(|e| JotError::MalformedPayload(format!("JSON serialization failed: {e}")))?;
    Ok(encode_bytes(&bytes))
}

/// Decode a segment and parse it as a JSON object.
///
/// Valid JSON that is not an object (a number, an array, a string) is
/// rejected, as is anything that is not valid JSON at all.
pub fn decode_json(data: &str) -> Result<JsonObject, JotError> {
    let bytes = decode_bytes(data)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| JotError::MalformedPayload(format!("segment is not a JSON object: {e}")))
}
