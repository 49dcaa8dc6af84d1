//! service/types.rs
//! Results handed back to the caller of `CipherService`.

use serde::Serialize;

use crate::telemetry::StageTimes;

/// Diagnostics for one encryption. Previews are truncated hex with a `...` suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncryptStats {
    pub image_size: usize,
    pub fingerprint_preview: String,
    pub salt_preview: String,
    pub nonce_preview: String,
    /// Raw envelope length before base64: 16 + 12 + message + 16.
    pub envelope_size: usize,
    pub stage_times: StageTimes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncryptOutcome {
    /// Base64 `salt || nonce || ciphertext`.
    pub envelope: String,
    pub stats: EncryptStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecryptStats {
    pub image_size: usize,
    pub fingerprint_preview: String,
    pub stage_times: StageTimes,
}

/// Outcome of a decryption attempt.
///
/// Every cryptographic failure (bad base64, short envelope, tag mismatch,
/// non-UTF-8 plaintext) is the same `Failure` with the same reason text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DecryptOutcome {
    Success { message: String, stats: DecryptStats },
    Failure { reason: String },
}

impl DecryptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DecryptOutcome::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            DecryptOutcome::Success { message, .. } => Some(message),
            DecryptOutcome::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            DecryptOutcome::Success { .. } => None,
            DecryptOutcome::Failure { reason } => Some(reason),
        }
    }

    pub fn stats(&self) -> Option<&DecryptStats> {
        match self {
            DecryptOutcome::Success { stats, .. } => Some(stats),
            DecryptOutcome::Failure { .. } => None,
        }
    }
}
