//! types.rs
//! Crate-level error covering image input, randomness, crypto, envelope and config.
//!
//! - `From<T>` impls enable `?` across the service.
//! - Only `ImageUnavailable` is meant to reach a user as-is; cryptographic
//!   decryption failures are collapsed into `DecryptOutcome::Failure` before
//!   they can escape the service.

use std::io;

use thiserror::Error;

use crate::crypto::CryptoError;
use crate::envelope::EnvelopeError;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The image bytes could not be materialized (missing file, permissions, ...).
    #[error("could not read input image: {source}")]
    ImageUnavailable {
        #[source]
        source: io::Error,
    },

    /// Cryptographic error (random source, key length, seal).
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Envelope could not be decoded.
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl CipherError {
    pub fn image_unavailable(source: io::Error) -> Self {
        CipherError::ImageUnavailable { source }
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(e: serde_json::Error) -> Self {
        CipherError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
