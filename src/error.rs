//! Error types for the incoming message core

use thiserror::Error;

/// Errors produced while processing an inbound encrypted message
///
/// The set is closed so callers can branch on kind instead of matching
/// message strings. The payload of each variant carries the underlying
/// failure message verbatim.
#[derive(Error, Debug)]
pub enum HcxError {
    /// Network failure or non-success status while retrieving key material
    #[error("key fetch failed: {0}")]
    KeyFetch(String),

    /// The token does not have the compact-serialization shape
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Key unwrap, authenticated decryption, or reconstitution failed
    #[error("decryption failed: {0}")]
    Decryption(String),
}

pub type Result<T> = std::result::Result<T, HcxError>;
