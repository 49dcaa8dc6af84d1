pub mod types;
pub mod aead;
pub mod kdf;
pub mod nonce;
pub mod digest;

pub use types::*;
pub use aead::{AeadCipher, Aes256GcmCipher};
pub use kdf::*;
pub use nonce::*;
pub use digest::*;
