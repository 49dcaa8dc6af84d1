//! crypto/digest.rs
//! Image fingerprinting.
//!
//! Design notes:
//! - The image is an opaque byte blob; nothing is parsed. Any input, including
//!   an empty one, has a fingerprint.
//! - The digest primitive is a trait so the service can be handed another one,
//!   but the wire format only interoperates with SHA-256.

use sha2::{Digest as _, Sha256};

use crate::crypto::types::Fingerprint;

/// Collision-resistant digest producing a 32-byte fingerprint.
pub trait DigestFunction: Send + Sync {
    fn digest(&self, bytes: &[u8]) -> Fingerprint;
}

/// SHA-256, the digest the envelope format is defined with.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sha256Digest;

impl DigestFunction for Sha256Digest {
    #[inline]
    fn digest(&self, bytes: &[u8]) -> Fingerprint {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Fingerprint(hasher.finalize().into())
    }
}

/// SHA-256 fingerprint of the raw image bytes.
#[inline]
pub fn fingerprint(bytes: &[u8]) -> Fingerprint {
    Sha256Digest.digest(bytes)
}
