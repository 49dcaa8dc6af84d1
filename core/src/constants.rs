//! constants.rs
//! Fixed sizes and parameters of the image-bound envelope.
//!
//! Every offset used to slice an envelope is derived from these values.
//! Changing one of them changes the wire format.

/// Random per-message salt, carried in clear at the front of the envelope.
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag (128 bits), appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// AES-256 key length.
pub const KEY_LEN: usize = 32;

/// SHA-256 digest length of the bound image.
pub const FINGERPRINT_LEN: usize = 32;

/// Salt fed to PBKDF2: `salt || fingerprint`.
pub const COMBINED_SALT_LEN: usize = SALT_LEN + FINGERPRINT_LEN;

/// Bytes preceding the ciphertext: `salt || nonce`.
pub const ENVELOPE_HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// Shortest decodable envelope (empty ciphertext). An envelope this short
/// still fails authentication, but it is not a format error.
pub const ENVELOPE_MIN_LEN: usize = ENVELOPE_HEADER_LEN;

/// PBKDF2-HMAC-SHA256 iteration count used by the wire format.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Hex characters shown for the image fingerprint (8 bytes).
pub const FINGERPRINT_PREVIEW_CHARS: usize = 16;

/// Hex characters shown for salt and nonce (4 bytes).
pub const SALT_PREVIEW_CHARS: usize = 8;
pub const NONCE_PREVIEW_CHARS: usize = 8;

/// Marker appended to every truncated preview.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// The single user-visible text for every cryptographic decryption failure.
pub const DECRYPTION_FAILED: &str =
    "Decryption failed: Wrong password, wrong image, or tampered data";
