// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! Password + image key derivation.
//!
//! Design:
//! - combined_salt = salt (16) || fingerprint (32)
//! - key = PBKDF2-HMAC-SHA256(utf8(password), combined_salt, iterations) -> 32 bytes
//!
//! The key depends on both the secret (password) and possession of the exact
//! image bytes. Changing either yields an unrelated key.
//!
//! Notes:
//! - The password is used exactly as given: no trimming, no normalization,
//!   no truncation or padding.
//! - Deterministic: no internal randomness.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::constants::{COMBINED_SALT_LEN, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
use crate::crypto::types::{CryptoError, DerivedKey, Fingerprint, Salt};

/// Password-based key stretching over an arbitrary salt.
pub trait KeyStretch: Send + Sync {
    /// Fill `out` from `password` and `salt`.
    fn stretch(&self, password: &[u8], salt: &[u8], out: &mut [u8; KEY_LEN]);
}

/// PBKDF2 with HMAC-SHA256 as PRF.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pbkdf2Sha256 {
    iterations: u32,
}

impl Pbkdf2Sha256 {
    /// Errors:
    /// - `CryptoError::InvalidParams` if `iterations` is zero.
    pub fn new(iterations: u32) -> Result<Self, CryptoError> {
        if iterations == 0 {
            return Err(CryptoError::InvalidParams("PBKDF2 iterations must be at least 1".into()));
        }
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for Pbkdf2Sha256 {
    fn default() -> Self {
        Self { iterations: PBKDF2_ITERATIONS }
    }
}

impl KeyStretch for Pbkdf2Sha256 {
    fn stretch(&self, password: &[u8], salt: &[u8], out: &mut [u8; KEY_LEN]) {
        pbkdf2_hmac::<Sha256>(password, salt, self.iterations, out);
    }
}

/// `salt || fingerprint`, the salt actually fed to the stretch function.
#[inline]
pub fn combined_salt(salt: &Salt, fingerprint: &Fingerprint) -> [u8; COMBINED_SALT_LEN] {
    let mut out = [0u8; COMBINED_SALT_LEN];
    out[..SALT_LEN].copy_from_slice(salt.as_bytes());
    out[SALT_LEN..].copy_from_slice(fingerprint.as_bytes());
    out
}

/// Derive the per-message AES-256 key from password, salt and image fingerprint.
pub fn derive_key(
    stretch: &dyn KeyStretch,
    password: &str,
    salt: &Salt,
    fingerprint: &Fingerprint,
) -> DerivedKey {
    let salt = combined_salt(salt, fingerprint);
    let mut key = [0u8; KEY_LEN];
    stretch.stretch(password.as_bytes(), &salt, &mut key);
    let derived = DerivedKey::from_bytes(key);
    key.zeroize();
    derived
}
