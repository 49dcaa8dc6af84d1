// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Random salt and nonce generation.
//!
//! Design:
//! - Salt (16 bytes) and nonce (12 bytes) are drawn fresh for every encryption
//!   from a cryptographically secure source. They are never derived.
//! - The source is injected so tests can substitute a seeded generator.
//!
//! Security notes:
//! - `SeededRandom` is deterministic. It exists for reproducible tests and must
//!   not back a production service.

use std::sync::Mutex;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::constants::{NONCE_LEN, SALT_LEN};
use crate::crypto::types::{CryptoError, Nonce, Salt};

/// Source of unpredictable bytes for salts and nonces.
pub trait SecureRandom: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// Operating-system CSPRNG.
#[derive(Copy, Clone, Debug, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::RandomUnavailable(e.to_string()))
    }
}

/// Deterministic generator seeded from a `u64`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl SecureRandom for SeededRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| CryptoError::RandomUnavailable("seeded generator poisoned".into()))?;
        rng.fill_bytes(dest);
        Ok(())
    }
}

/// Draw a fresh 16-byte salt.
#[inline]
pub fn draw_salt(random: &dyn SecureRandom) -> Result<Salt, CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    random.fill(&mut salt)?;
    Ok(Salt(salt))
}

/// Draw a fresh 12-byte nonce.
#[inline]
pub fn draw_nonce(random: &dyn SecureRandom) -> Result<Nonce, CryptoError> {
    let mut nonce = [0u8; NONCE_LEN];
    random.fill(&mut nonce)?;
    Ok(Nonce(nonce))
}
