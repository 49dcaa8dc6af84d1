// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! Sealed-box encryption for the envelope payload.
//!
//! Design notes:
//! - AES-256-GCM: 32-byte key, 12-byte nonce, 16-byte tag appended to the ciphertext.
//! - No associated data is bound; salt and nonce are protected through the key
//!   derivation and the GCM state respectively.
//! - `open` must fail closed: every refusal is the same `CryptoError::AuthFailure`,
//!   never partial plaintext.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce as AesNonce};

use crate::constants::{KEY_LEN, TAG_LEN};
use crate::crypto::types::{CryptoError, DerivedKey, Nonce};

/// Authenticated encryption with a 96-bit nonce and 128-bit tag.
pub trait AeadCipher: Send + Sync {
    /// Encrypt `plaintext`; the result is `plaintext.len() + TAG_LEN` bytes.
    fn seal(&self, key: &DerivedKey, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verify and decrypt `ciphertext` (ciphertext || tag).
    fn open(&self, key: &DerivedKey, nonce: &Nonce, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// AES-256-GCM.
#[derive(Copy, Clone, Debug, Default)]
pub struct Aes256GcmCipher;

impl Aes256GcmCipher {
    fn cipher(key: &DerivedKey) -> Result<Aes256Gcm, CryptoError> {
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN,
            actual: key.as_bytes().len(),
        })
    }
}

impl AeadCipher for Aes256GcmCipher {
    fn seal(&self, key: &DerivedKey, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::cipher(key)?
            .encrypt(AesNonce::from_slice(nonce.as_bytes()), plaintext)
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))
    }

    fn open(&self, key: &DerivedKey, nonce: &Nonce, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < TAG_LEN {
            return Err(CryptoError::AuthFailure);
        }

        let cipher = Self::cipher(key).map_err(|_| CryptoError::AuthFailure)?;
        cipher
            .decrypt(AesNonce::from_slice(nonce.as_bytes()), ciphertext)
            .map_err(|_| CryptoError::AuthFailure)
    }
}

/// Seal with the default AES-256-GCM cipher.
#[inline]
pub fn seal(key: &DerivedKey, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    Aes256GcmCipher.seal(key, nonce, plaintext)
}

/// Open with the default AES-256-GCM cipher.
#[inline]
pub fn open(key: &DerivedKey, nonce: &Nonce, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    Aes256GcmCipher.open(key, nonce, ciphertext)
}
