//! envelope/types.rs
//! Decoded envelope parts and the codec error.

use std::fmt;

use crate::constants::ENVELOPE_HEADER_LEN;
use crate::crypto::types::{Nonce, Salt};

/// `salt || nonce || ciphertext`, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeParts {
    pub salt: Salt,
    pub nonce: Nonce,
    /// Ciphertext with the tag appended.
    pub ciphertext: Vec<u8>,
}

impl EnvelopeParts {
    /// Length of the raw (pre-base64) envelope.
    pub fn encoded_len(&self) -> usize {
        ENVELOPE_HEADER_LEN + self.ciphertext.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Input is not standard padded base64.
    InvalidBase64(String),

    /// Decoded bytes are shorter than `salt || nonce`.
    TooShort { have: usize, need: usize },
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeError::InvalidBase64(msg) =>
                write!(f, "envelope is not valid base64: {}", msg),
            EnvelopeError::TooShort { have, need } =>
                write!(f, "envelope too short: have={}, need at least={}", have, need),
        }
    }
}

impl std::error::Error for EnvelopeError {}
