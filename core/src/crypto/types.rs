// ## 📂 File: `src/crypto/types.rs`

//! crypto/types.rs
//! Fixed-size value types passed between the crypto stages, and their error.
//!
//! Design notes:
//! - Salt, nonce and fingerprint are not secret; they derive `Debug` and hex-print.
//! - `DerivedKey` is secret: zeroized on drop, redacted in `Debug`, never serialized.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{FINGERPRINT_LEN, KEY_LEN, NONCE_LEN, SALT_LEN};

/// SHA-256 digest of the raw image bytes.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; FINGERPRINT_LEN]);

/// Per-message random salt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Salt(pub [u8; SALT_LEN]);

/// Per-message random AEAD nonce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Nonce(pub [u8; NONCE_LEN]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl Salt {
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

impl Nonce {
    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

/// 256-bit key material. Lives for one encrypt/decrypt call only.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Tag mismatch, truncated ciphertext, or any other reason `open` refused.
    /// Deliberately carries no detail.
    AuthFailure,

    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Rejected primitive parameter (e.g. zero PBKDF2 iterations).
    InvalidParams(String),

    /// The secure random source could not produce bytes.
    RandomUnavailable(String),

    /// Sealing failed (e.g. plaintext exceeds the AEAD limit).
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            AuthFailure =>
                write!(f, "authentication failed"),
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidParams(msg) =>
                write!(f, "invalid parameters: {}", msg),
            RandomUnavailable(msg) =>
                write!(f, "secure random source unavailable: {}", msg),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_key_debug_is_redacted() {
        let key = DerivedKey::from_bytes([0xAB; KEY_LEN]);
        let shown = format!("{:?}", key);
        assert_eq!(shown, "DerivedKey(<redacted>)");
        assert!(!shown.to_lowercase().contains("ab"));
    }

    #[test]
    fn fingerprint_debug_is_hex() {
        let fp = Fingerprint([0x01; FINGERPRINT_LEN]);
        assert_eq!(format!("{:?}", fp), format!("Fingerprint({})", "01".repeat(32)));
    }
}
