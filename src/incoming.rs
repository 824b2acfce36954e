//! Incoming message pipeline
//!
//! The orchestration entry point for inbound encrypted messages addressed to
//! this participant. One call runs a linear two-step sequence: fetch the
//! participant's key material, then decrypt the token. The first failure
//! terminates the call with its own error kind; there is no retry and no
//! partial result.
//!
//! The pipeline is stateless apart from the immutable configuration, so a
//! single instance can serve concurrent calls.

use crate::config::ParticipantConfig;
use crate::error::Result;
use crate::jwe;
use crate::key_source::{HttpKeyMaterialSource, KeyMaterialSource};
use crate::operations::Operation;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// A fully decrypted protocol message
///
/// Serializes with the protocol's output keys: `HEADERS` for the recovered
/// protected header and `PAYLOAD` for the business content.
#[derive(Debug, Clone, Serialize)]
pub struct DecryptedMessage {
    #[serde(rename = "HEADERS")]
    pub headers: Map<String, Value>,
    #[serde(rename = "PAYLOAD")]
    pub payload: Value,
}

/// Pipeline for inbound encrypted messages
pub struct IncomingMessagePipeline {
    config: ParticipantConfig,
    key_source: Arc<dyn KeyMaterialSource>,
}

impl IncomingMessagePipeline {
    /// Creates a pipeline with an HTTP key source wired from the
    /// configuration's `verify_peer` setting
    pub fn new(config: ParticipantConfig) -> Result<Self> {
        let source = HttpKeyMaterialSource::new(config.verify_peer)?;
        Ok(Self::with_key_source(config, Arc::new(source)))
    }

    /// Creates a pipeline with a caller-supplied key source
    pub fn with_key_source(
        config: ParticipantConfig,
        key_source: Arc<dyn KeyMaterialSource>,
    ) -> Self {
        Self { config, key_source }
    }

    /// The participant configuration this pipeline was built with
    pub fn config(&self) -> &ParticipantConfig {
        &self.config
    }

    /// Processes one inbound token.
    ///
    /// `operation` identifies the target workflow for the caller's dispatch;
    /// it is carried through unchanged and never interpreted here.
    ///
    /// The key material is fetched fresh for this call, used once, and
    /// discarded. Fetch failures propagate as
    /// [`HcxError::KeyFetch`](crate::error::HcxError::KeyFetch) without the
    /// decryptor ever running; decrypt failures propagate as
    /// [`HcxError::MalformedToken`](crate::error::HcxError::MalformedToken)
    /// or [`HcxError::Decryption`](crate::error::HcxError::Decryption).
    pub async fn process(&self, token: &str, operation: Operation) -> Result<DecryptedMessage> {
        info!(
            participant = %self.config.participant_code,
            operation = %operation,
            token_len = token.len(),
            "Processing incoming message"
        );

        let key_material = self
            .key_source
            .fetch(&self.config.encryption_private_key_url)
            .await?;

        let decrypted = jwe::decrypt(&key_material, token)?;

        debug!(operation = %operation, "Incoming message decrypted");

        Ok(DecryptedMessage {
            headers: decrypted.header,
            payload: decrypted.payload,
        })
    }
}
