//! service/mod.rs
//! `encrypt` / `decrypt` entry points over an image, a password and a message.
//!
//! Pipeline (encrypt):
//! ```text
//! image bytes --SHA-256--> fingerprint
//! random      ----------> salt (16), nonce (12)
//! password, salt || fingerprint --PBKDF2--> key
//! key, nonce, message --AES-256-GCM--> ciphertext || tag
//! base64(salt || nonce || ciphertext || tag) --> envelope
//! ```
//!
//! Design notes:
//! - Stateless across calls: every salt, nonce and key is local to one call,
//!   so a shared service needs no locking beyond what a provider brings itself.
//! - Providers are injected trait objects; `CipherService::new()` wires the
//!   wire-compatible defaults.
//! - Decryption failures never say why; see `DecryptOutcome`.

pub mod source;
pub mod types;

pub use source::*;
pub use types::*;

use tracing::debug;

use crate::config::CipherConfig;
use crate::constants::{
    DECRYPTION_FAILED, FINGERPRINT_PREVIEW_CHARS, NONCE_PREVIEW_CHARS, SALT_PREVIEW_CHARS,
};
use crate::crypto::{
    derive_key, draw_nonce, draw_salt, AeadCipher, Aes256GcmCipher, CryptoError, DigestFunction,
    Fingerprint, KeyStretch, OsRandom, Pbkdf2Sha256, SecureRandom, Sha256Digest,
};
use crate::envelope::{unpack, EnvelopeParts};
use crate::telemetry::{Stage, TelemetryTimer};
use crate::types::{CipherError, Result};
use crate::utils::hex_preview;

pub struct CipherService {
    random: Box<dyn SecureRandom>,
    digest: Box<dyn DigestFunction>,
    key_stretch: Box<dyn KeyStretch>,
    cipher: Box<dyn AeadCipher>,
}

impl Default for CipherService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CipherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherService").finish_non_exhaustive()
    }
}

impl CipherService {
    /// OS randomness, SHA-256, PBKDF2-HMAC-SHA256 (100,000 rounds), AES-256-GCM.
    pub fn new() -> Self {
        Self {
            random: Box::new(OsRandom),
            digest: Box::new(Sha256Digest),
            key_stretch: Box::new(Pbkdf2Sha256::default()),
            cipher: Box::new(Aes256GcmCipher),
        }
    }

    /// Default providers with the configured key-stretching parameters.
    pub fn from_config(config: &CipherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new().with_key_stretch(Pbkdf2Sha256::new(config.kdf.iterations)?))
    }

    pub fn with_random(mut self, random: impl SecureRandom + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn with_digest(mut self, digest: impl DigestFunction + 'static) -> Self {
        self.digest = Box::new(digest);
        self
    }

    pub fn with_key_stretch(mut self, key_stretch: impl KeyStretch + 'static) -> Self {
        self.key_stretch = Box::new(key_stretch);
        self
    }

    pub fn with_cipher(mut self, cipher: impl AeadCipher + 'static) -> Self {
        self.cipher = Box::new(cipher);
        self
    }

    /// Encrypt `message` under `password` and the exact bytes of `image`.
    ///
    /// Errors:
    /// - `CipherError::ImageUnavailable` if the image cannot be read.
    /// - `CipherError::Crypto` if the random source or the cipher fails.
    pub fn encrypt<I>(&self, image: &I, password: &str, message: &str) -> Result<EncryptOutcome>
    where
        I: ImageSource + ?Sized,
    {
        let mut timer = TelemetryTimer::new();

        let image = timer
            .time(Stage::Read, move || image.read_image())
            .map_err(CipherError::image_unavailable)?;
        debug!(image_size = image.len(), "encrypting message");

        let fingerprint = timer.time(Stage::Fingerprint, || self.digest.digest(&image));

        let salt = draw_salt(self.random.as_ref())?;
        let nonce = draw_nonce(self.random.as_ref())?;

        let key = timer.time(Stage::DeriveKey, || {
            derive_key(self.key_stretch.as_ref(), password, &salt, &fingerprint)
        });
        let ciphertext =
            timer.time(Stage::Encrypt, || self.cipher.seal(&key, &nonce, message.as_bytes()))?;
        drop(key);

        let parts = EnvelopeParts { salt, nonce, ciphertext };
        let envelope = timer.time(Stage::Encode, || parts.pack());
        timer.finish();

        let envelope_size = parts.encoded_len();
        debug!(
            envelope_size,
            derive_key_ms = timer.stage_times.get_ms(Stage::DeriveKey),
            stages_ms = timer.stage_times.total_ms(),
            elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0,
            "message encrypted"
        );

        Ok(EncryptOutcome {
            envelope,
            stats: EncryptStats {
                image_size: image.len(),
                fingerprint_preview: hex_preview(fingerprint.as_bytes(), FINGERPRINT_PREVIEW_CHARS),
                salt_preview: hex_preview(salt.as_bytes(), SALT_PREVIEW_CHARS),
                nonce_preview: hex_preview(nonce.as_bytes(), NONCE_PREVIEW_CHARS),
                envelope_size,
                stage_times: timer.stage_times,
            },
        })
    }

    /// Recover the message sealed in `envelope`.
    ///
    /// Only an unreadable image is an `Err`. Everything else, including a
    /// malformed envelope, is a `DecryptOutcome`.
    pub fn decrypt<I>(&self, image: &I, password: &str, envelope: &str) -> Result<DecryptOutcome>
    where
        I: ImageSource + ?Sized,
    {
        let mut timer = TelemetryTimer::new();

        let image = timer
            .time(Stage::Read, move || image.read_image())
            .map_err(CipherError::image_unavailable)?;
        debug!(image_size = image.len(), "decrypting envelope");

        let fingerprint = timer.time(Stage::Fingerprint, || self.digest.digest(&image));

        let outcome = match self.open_envelope(&fingerprint, password, envelope, &mut timer) {
            Ok(message) => DecryptOutcome::Success {
                message,
                stats: DecryptStats {
                    image_size: image.len(),
                    fingerprint_preview: hex_preview(
                        fingerprint.as_bytes(),
                        FINGERPRINT_PREVIEW_CHARS,
                    ),
                    stage_times: timer.stage_times.clone(),
                },
            },
            Err(_) => {
                debug!("decryption failed");
                DecryptOutcome::Failure { reason: DECRYPTION_FAILED.to_string() }
            }
        };

        timer.finish();
        debug!(
            success = outcome.is_success(),
            derive_key_ms = timer.stage_times.get_ms(Stage::DeriveKey),
            stages_ms = timer.stage_times.total_ms(),
            elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0,
            "decryption finished"
        );
        Ok(outcome)
    }

    fn open_envelope(
        &self,
        fingerprint: &Fingerprint,
        password: &str,
        envelope: &str,
        timer: &mut TelemetryTimer,
    ) -> Result<String> {
        let parts = timer.time(Stage::Decode, || unpack(envelope))?;

        let key = timer.time(Stage::DeriveKey, || {
            derive_key(self.key_stretch.as_ref(), password, &parts.salt, fingerprint)
        });
        let plaintext =
            timer.time(Stage::Decrypt, || self.cipher.open(&key, &parts.nonce, &parts.ciphertext))?;

        String::from_utf8(plaintext).map_err(|_| CipherError::Crypto(CryptoError::AuthFailure))
    }
}

/// Encrypt with the default service.
pub fn encrypt<I>(image: &I, password: &str, message: &str) -> Result<EncryptOutcome>
where
    I: ImageSource + ?Sized,
{
    CipherService::new().encrypt(image, password, message)
}

/// Decrypt with the default service.
pub fn decrypt<I>(image: &I, password: &str, envelope: &str) -> Result<DecryptOutcome>
where
    I: ImageSource + ?Sized,
{
    CipherService::new().decrypt(image, password, envelope)
}
