//! Compact JSON Web Tokens signed with the HMAC-SHA2 family.
//!
//! Tokens are three unpadded base64url segments joined by dots:
//! `header.payload.signature`. Headers and payloads are insertion-ordered
//! JSON objects. Signing supports HS256, HS384, and HS512 shared-secret
//! signatures plus the unsigned `none` algorithm; verification recomputes
//! the tag and compares it in constant time, returning the decoded claims
//! either way so callers can inspect, but not trust, unverified tokens.
//!
//! ```
//! use jot::{sign, verify, Algorithm, JsonObject};
//!
//! let mut payload = JsonObject::new();
//! payload.insert("sub".to_string(), serde_json::json!("user:alice"));
//!
//! let token = sign(&payload, b"shared-secret", Algorithm::Hs256)?;
//! let result = verify(&token, b"shared-secret")?;
//! assert!(result.is_verified);
//! assert_eq!(result.payload, payload);
//! # Ok::<(), jot::JotError>(())
//! ```

pub mod algorithm;
pub mod base64url;
pub mod error;
pub mod secret;
pub mod sign;
pub mod verify;

pub use crate::algorithm::{Algorithm, AlgorithmSpec, HashFunction};
pub use crate::error::JotError;
pub use crate::secret::generate_secret;
pub use crate::sign::sign;
pub use crate::verify::{decode_unverified, verify, Verification};

/// An insertion-ordered JSON object, as used for headers and payloads.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
