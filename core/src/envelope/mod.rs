//! envelope/mod.rs
//! The self-describing transport string for one encrypted message.
//!
//! Wire format:
//! ```text
//! byte[0:16]   = salt
//! byte[16:28]  = nonce
//! byte[28:]    = ciphertext (plaintext length + 16-byte tag)
//! whole buffer = standard base64 with padding, no line wrapping
//! ```
//!
//! Notes:
//! - Salt and nonce are fixed-size, so slicing is positional and no length prefix exists.
//! - Nothing in the envelope is authenticated on its own; integrity comes from AEAD open.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
