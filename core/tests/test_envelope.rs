// Envelope codec: positional layout, padded standard base64, 28-byte floor.

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use proptest::prelude::*;

    use image_cipher_core::constants::{ENVELOPE_MIN_LEN, NONCE_LEN, SALT_LEN};
    use image_cipher_core::crypto::{Nonce, Salt};
    use image_cipher_core::envelope::{pack, pack_bytes, unpack, unpack_bytes, EnvelopeError, EnvelopeParts};

    fn salt() -> Salt {
        Salt(core::array::from_fn(|i| i as u8))
    }

    fn nonce() -> Nonce {
        Nonce(core::array::from_fn(|i| 0xF0 + i as u8))
    }

    #[test]
    fn layout_is_salt_nonce_ciphertext() {
        let raw = pack_bytes(&salt(), &nonce(), &[0xAA, 0xBB]);
        assert_eq!(raw.len(), SALT_LEN + NONCE_LEN + 2);
        assert_eq!(&raw[..16], salt().as_bytes());
        assert_eq!(&raw[16..28], nonce().as_bytes());
        assert_eq!(&raw[28..], &[0xAA, 0xBB]);
    }

    #[test]
    fn pack_is_standard_padded_base64() {
        let s = pack(&salt(), &nonce(), &[1, 2, 3]);
        // 31 bytes -> 44 chars, two of them padding.
        assert_eq!(s.len(), 44);
        assert!(s.ends_with('='));
        assert!(!s.contains('\n'));
        assert_eq!(STANDARD.decode(&s).unwrap(), pack_bytes(&salt(), &nonce(), &[1, 2, 3]));
    }

    #[test]
    fn unpack_slices_positionally() {
        let parts = unpack(&pack(&salt(), &nonce(), b"ciphertext")).unwrap();
        assert_eq!(parts.salt, salt());
        assert_eq!(parts.nonce, nonce());
        assert_eq!(parts.ciphertext, b"ciphertext");
        assert_eq!(parts.encoded_len(), 28 + 10);
    }

    #[test]
    fn exactly_28_bytes_is_not_a_format_error() {
        let parts = unpack_bytes(&[0u8; ENVELOPE_MIN_LEN]).unwrap();
        assert!(parts.ciphertext.is_empty());
    }

    #[test]
    fn short_envelope_rejected() {
        let s = STANDARD.encode([0u8; 27]);
        assert_eq!(unpack(&s).unwrap_err(), EnvelopeError::TooShort { have: 27, need: 28 });
        assert!(matches!(unpack("").unwrap_err(), EnvelopeError::TooShort { have: 0, .. }));
    }

    #[test]
    fn non_base64_rejected() {
        for bad in ["not base64!", "AAAA*AAA", "YWJj\nZGVm", "YWJjZA"] {
            assert!(
                matches!(unpack(bad), Err(EnvelopeError::InvalidBase64(_))),
                "{:?} accepted",
                bad
            );
        }
    }

    #[test]
    fn url_safe_alphabet_rejected() {
        // 0xFB 0xFF encodes to "+/" in the standard alphabet and "-_" in the URL-safe one.
        let mut raw = vec![0u8; 27];
        raw.extend_from_slice(&[0xFB, 0xFF, 0xFF]);
        let standard = STANDARD.encode(&raw);
        let url_safe = standard.replace('+', "-").replace('/', "_");
        assert!(unpack(&standard).is_ok());
        assert!(matches!(unpack(&url_safe), Err(EnvelopeError::InvalidBase64(_))));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        let s = pack(&salt(), &nonce(), b"x");
        let padded = format!("  {}\n", s);
        assert_eq!(unpack(&padded).unwrap(), unpack(&s).unwrap());
    }

    #[test]
    fn parts_pack_matches_free_function() {
        let parts = EnvelopeParts { salt: salt(), nonce: nonce(), ciphertext: vec![9; 20] };
        assert_eq!(parts.pack(), pack(&salt(), &nonce(), &[9; 20]));
    }

    proptest! {
        #[test]
        fn prop_decoded_length_is_header_plus_ciphertext(ct in proptest::collection::vec(any::<u8>(), 0..256)) {
            let s = pack(&salt(), &nonce(), &ct);
            let raw = STANDARD.decode(&s).unwrap();
            prop_assert_eq!(raw.len(), 28 + ct.len());
            let parts = unpack(&s).unwrap();
            prop_assert_eq!(parts.ciphertext, ct);
        }
    }
}
