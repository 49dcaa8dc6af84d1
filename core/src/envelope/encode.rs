//! src/envelope/encode.rs
//!
//! Envelope encoding.
//!
//! Design notes:
//! - Field order must match `decode.rs` exactly: salt, nonce, ciphertext.
//! - Output is `base64::engine::general_purpose::STANDARD` (padded, no wrapping).

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::constants::ENVELOPE_HEADER_LEN;
use crate::crypto::types::{Nonce, Salt};
use crate::envelope::types::EnvelopeParts;

/// Raw envelope bytes, before base64.
pub fn pack_bytes(salt: &Salt, nonce: &Nonce, ciphertext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + ciphertext.len());
    out.extend_from_slice(salt.as_bytes());   // 0..16  salt
    out.extend_from_slice(nonce.as_bytes());  // 16..28 nonce
    out.extend_from_slice(ciphertext);        // 28..   ciphertext || tag
    out
}

/// Serialize `salt || nonce || ciphertext` into the transport string.
pub fn pack(salt: &Salt, nonce: &Nonce, ciphertext: &[u8]) -> String {
    STANDARD.encode(pack_bytes(salt, nonce, ciphertext))
}

impl EnvelopeParts {
    pub fn pack(&self) -> String {
        pack(&self.salt, &self.nonce, &self.ciphertext)
    }
}
