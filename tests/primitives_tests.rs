// tests/primitives_tests.rs
mod common;
use common::MASTER_KEY;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use qfcrypt::crypto::{derive_key, size_pad, size_unpad, zero_pad};
use qfcrypt::{generate_iv, generate_master_key, CryptError};

#[test]
fn test_derive_key_matches_reference_vector() {
    let salt: Vec<u8> = (0u8..16).collect();
    let key = derive_key(MASTER_KEY.as_bytes(), &salt);
    assert_eq!(
        hex::encode(key.expose_secret()),
        "3680e7e16559058849e6fd6e7ba6dadf649080b712b6639d2ebc6a0e4003e1e6"
    );
}

#[test]
fn test_derive_key_depends_on_salt() {
    let a = derive_key(MASTER_KEY.as_bytes(), &[0u8; 16]);
    let b = derive_key(MASTER_KEY.as_bytes(), &[1u8; 16]);
    let again = derive_key(MASTER_KEY.as_bytes(), &[0u8; 16]);
    assert_ne!(a.expose_secret(), b.expose_secret());
    assert_eq!(a.expose_secret(), again.expose_secret());
}

#[test]
fn test_size_pad_always_adds_padding() {
    assert_eq!(size_pad(Vec::new(), 16), vec![16u8; 16]);

    let padded = size_pad(b"hello world".to_vec(), 16);
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[11..], &[5u8; 5]);

    let aligned = size_pad(vec![0xaa; 16], 16);
    assert_eq!(aligned.len(), 32);
    assert_eq!(&aligned[16..], &[16u8; 16]);
}

#[test]
fn test_size_unpad_strips_count() {
    let padded = size_pad(b"hello world".to_vec(), 16);
    assert_eq!(size_unpad(padded).unwrap(), b"hello world");
    assert_eq!(size_unpad(vec![16u8; 16]).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_size_unpad_rejects_out_of_range_count() {
    assert!(matches!(size_unpad(Vec::new()), Err(CryptError::PaddingInvalid)));
    assert!(matches!(size_unpad(vec![1, 2, 0]), Err(CryptError::PaddingInvalid)));
    assert!(matches!(size_unpad(vec![9, 9, 4]), Err(CryptError::PaddingInvalid)));
}

#[test]
fn test_zero_pad() {
    assert_eq!(zero_pad(b"abc".to_vec(), 8), b"abc\0\0\0\0\0");
    assert_eq!(zero_pad(vec![7u8; 8], 8).len(), 16);
}

#[test]
fn test_generate_iv_is_random() {
    let a = generate_iv(16).unwrap();
    let b = generate_iv(16).unwrap();
    assert_eq!(a.len(), 16);
    assert_ne!(a, b);
}

#[test]
fn test_generate_master_key_is_usable() {
    let key = generate_master_key(b"origin material").unwrap();
    assert_eq!(key.len(), 44);
    assert_eq!(STANDARD.decode(&key).unwrap().len(), 32);
    assert_ne!(key, generate_master_key(b"origin material").unwrap());

    let cfg = qfcrypt::CipherConfig::new(
        "GENKEY",
        key.into_bytes(),
        Vec::<(String, Vec<u8>)>::new(),
    )
    .unwrap();
    let ct = cfg.encrypt(b"with generated key", None).unwrap();
    assert_eq!(cfg.decrypt(&ct, None).unwrap(), b"with generated key");
}
