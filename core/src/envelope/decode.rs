//! src/envelope/decode.rs
//!
//! Envelope decoding.
//!
//! Design notes:
//! - Surrounding ASCII whitespace is ignored (pasted text); anything else
//!   outside the standard alphabet is a format error.
//! - The only structural check is the 28-byte floor. A short ciphertext is
//!   left for AEAD open to reject.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::constants::{ENVELOPE_HEADER_LEN, ENVELOPE_MIN_LEN, NONCE_LEN, SALT_LEN};
use crate::crypto::types::{Nonce, Salt};
use crate::envelope::types::{EnvelopeError, EnvelopeParts};

/// Split raw envelope bytes into salt, nonce and ciphertext.
pub fn unpack_bytes(buf: &[u8]) -> Result<EnvelopeParts, EnvelopeError> {
    if buf.len() < ENVELOPE_MIN_LEN {
        return Err(EnvelopeError::TooShort { have: buf.len(), need: ENVELOPE_MIN_LEN });
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&buf[..SALT_LEN]);
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&buf[SALT_LEN..ENVELOPE_HEADER_LEN]);

    Ok(EnvelopeParts {
        salt: Salt(salt),
        nonce: Nonce(nonce),
        ciphertext: buf[ENVELOPE_HEADER_LEN..].to_vec(),
    })
}

/// Parse the transport string back into its parts.
pub fn unpack(s: &str) -> Result<EnvelopeParts, EnvelopeError> {
    let raw = STANDARD
        .decode(s.trim_matches(|c: char| c.is_ascii_whitespace()))
        .map_err(|e| EnvelopeError::InvalidBase64(e.to_string()))?;
    unpack_bytes(&raw)
}
