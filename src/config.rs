//! Participant configuration for the exchange network
//!
//! A participant node is identified by its participant code and the set of
//! endpoints and credentials it was onboarded with. The configuration is
//! built once at startup and shared read-only across all message processing.

use std::fmt;

/// Immutable identity and endpoint set for one participant node
#[derive(Clone)]
pub struct ParticipantConfig {
    /// Participant code assigned by the registry
    pub participant_code: String,
    /// Token-generation endpoint of the authentication service
    pub auth_base_path: String,
    /// Base path of the protocol APIs
    pub protocol_base_path: String,
    /// Location of this participant's PEM-encoded decryption private key
    pub encryption_private_key_url: String,
    /// Authentication username
    pub username: String,
    /// Authentication password
    pub password: String,
    /// Implementation-guide version URL
    pub ig_url: String,
    /// Whether TLS peer verification is performed when fetching key material.
    /// Some deployments serve the key endpoint with certificates that do not
    /// validate; disabling verification there must be a deliberate choice.
    pub verify_peer: bool,
}

impl ParticipantConfig {
    /// Creates a new participant configuration with peer verification enabled
    pub fn new(
        participant_code: impl Into<String>,
        auth_base_path: impl Into<String>,
        protocol_base_path: impl Into<String>,
        encryption_private_key_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        ig_url: impl Into<String>,
    ) -> Self {
        Self {
            participant_code: participant_code.into(),
            auth_base_path: auth_base_path.into(),
            protocol_base_path: protocol_base_path.into(),
            encryption_private_key_url: encryption_private_key_url.into(),
            username: username.into(),
            password: password.into(),
            ig_url: ig_url.into(),
            verify_peer: true,
        }
    }

    /// Sets the TLS peer-verification mode for the key-material endpoint
    pub fn with_verify_peer(mut self, verify_peer: bool) -> Self {
        self.verify_peer = verify_peer;
        self
    }
}

impl fmt::Debug for ParticipantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticipantConfig")
            .field("participant_code", &self.participant_code)
            .field("auth_base_path", &self.auth_base_path)
            .field("protocol_base_path", &self.protocol_base_path)
            .field("encryption_private_key_url", &self.encryption_private_key_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ig_url", &self.ig_url)
            .field("verify_peer", &self.verify_peer)
            .finish()
    }
}
