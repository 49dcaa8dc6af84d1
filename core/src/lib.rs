//! image-cipher-core
//!
//! Encrypts short text messages under a key derived from a password AND the
//! exact bytes of an image. Both are required to recover the plaintext.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Primitives and wire format
pub mod crypto;
pub mod envelope;
pub mod telemetry;

// Entry points
pub mod service;

pub use config::{CipherConfig, KdfParams};
pub use service::{
    decrypt, encrypt, CipherService, DecryptOutcome, DecryptStats, EncryptOutcome, EncryptStats,
    ImageSource,
};
pub use types::{CipherError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::CipherConfig;
    pub use crate::crypto::{
        AeadCipher, DigestFunction, KeyStretch, OsRandom, Pbkdf2Sha256, SecureRandom,
        SeededRandom, Sha256Digest,
    };
    pub use crate::service::{CipherService, DecryptOutcome, EncryptOutcome, ImageSource};
    pub use crate::types::{CipherError, Result};
}
