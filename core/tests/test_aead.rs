// AEAD seal/open: length invariant, fail-closed open, single opaque error.

use image_cipher_core::constants::TAG_LEN;
use image_cipher_core::crypto::aead::{open, seal};
use image_cipher_core::crypto::{AeadCipher, Aes256GcmCipher, CryptoError, DerivedKey, Nonce};

fn key(byte: u8) -> DerivedKey {
    DerivedKey::from_bytes([byte; 32])
}

const NONCE: Nonce = Nonce([0x5a; 12]);

#[test]
fn seal_appends_tag() {
    let ct = seal(&key(1), &NONCE, b"meet at dawn").unwrap();
    assert_eq!(ct.len(), 12 + TAG_LEN);
    assert_ne!(&ct[..12], b"meet at dawn");
}

#[test]
fn open_recovers_plaintext() {
    let ct = seal(&key(1), &NONCE, b"meet at dawn").unwrap();
    let pt = open(&key(1), &NONCE, &ct).unwrap();
    assert_eq!(pt, b"meet at dawn");
}

#[test]
fn empty_plaintext_is_just_a_tag() {
    let ct = Aes256GcmCipher.seal(&key(3), &NONCE, b"").unwrap();
    assert_eq!(ct.len(), TAG_LEN);
    assert_eq!(Aes256GcmCipher.open(&key(3), &NONCE, &ct).unwrap(), b"");
}

#[test]
fn wrong_key_is_auth_failure() {
    let ct = seal(&key(1), &NONCE, b"payload").unwrap();
    assert_eq!(open(&key(2), &NONCE, &ct).unwrap_err(), CryptoError::AuthFailure);
}

#[test]
fn wrong_nonce_is_auth_failure() {
    let ct = seal(&key(1), &NONCE, b"payload").unwrap();
    let other = Nonce([0x5b; 12]);
    assert_eq!(open(&key(1), &other, &ct).unwrap_err(), CryptoError::AuthFailure);
}

#[test]
fn any_flipped_bit_is_auth_failure() {
    let ct = seal(&key(1), &NONCE, b"payload").unwrap();
    for i in 0..ct.len() * 8 {
        let mut bad = ct.clone();
        bad[i / 8] ^= 1 << (i % 8);
        assert_eq!(
            open(&key(1), &NONCE, &bad).unwrap_err(),
            CryptoError::AuthFailure,
            "bit {} accepted",
            i
        );
    }
}

#[test]
fn truncated_ciphertext_is_auth_failure() {
    let ct = seal(&key(1), &NONCE, b"payload").unwrap();
    for len in [0, 1, TAG_LEN - 1, TAG_LEN, ct.len() - 1] {
        assert_eq!(
            open(&key(1), &NONCE, &ct[..len]).unwrap_err(),
            CryptoError::AuthFailure,
            "length {} accepted",
            len
        );
    }
}
