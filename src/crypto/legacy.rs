// src/crypto/legacy.rs
//! Zero-version decryption, kept so pre-tagging ciphertext stays readable
//!
//! Layout: `base64( AES-CBC(zero IV, zero-padded plaintext) || length suffix )`.
//! The suffix is whatever trails the last whole block, read as a big-endian
//! plaintext length. There is no authentication of any kind.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};
use tracing::warn;

use crate::aliases::{LegacyAesKey, LegacyKey};
use crate::consts::{BLOCK_SIZE, LEGACY_KEY_BUCKETS};
use crate::error::{CryptError, Result};

use super::decode_base64;
use super::padding::zero_padded_len;

/// Zero-pad a raw legacy key into its AES key.
///
/// The bucket is the smallest of 16/24/32 that holds the key. Padding adds
/// `bucket - len % bucket` bytes, so a key that already fills its bucket grows
/// by a whole bucket (16 → 32). Stored ciphertext depends on this.
pub fn format_legacy_key(key: &LegacyKey) -> Result<LegacyAesKey> {
    let raw = key.expose_secret();
    let bucket = LEGACY_KEY_BUCKETS
        .iter()
        .copied()
        .find(|&b| raw.len() <= b)
        .unwrap_or(LEGACY_KEY_BUCKETS[LEGACY_KEY_BUCKETS.len() - 1]);

    let padded_len = zero_padded_len(raw.len(), bucket);
    if !matches!(padded_len, 16 | 24 | 32) {
        return Err(CryptError::InvalidLegacyKey(raw.len()));
    }

    let mut padded = vec![0u8; padded_len];
    padded[..raw.len()].copy_from_slice(raw);
    Ok(LegacyAesKey::new(padded))
}

/// Decrypt a whole zero-version ciphertext string with the raw legacy key.
pub fn zero_version_decrypt(ciphertext: &str, key: &LegacyKey) -> Result<Vec<u8>> {
    let aes_key = format_legacy_key(key)?;

    let decoded = decode_base64(ciphertext.as_bytes())
        .map_err(|_| CryptError::MalformedCiphertext("zero-version payload is not base64"))?;

    let aligned = decoded.len() / BLOCK_SIZE * BLOCK_SIZE;
    let (body, suffix) = decoded.split_at(aligned);
    let plain_len = read_length_suffix(suffix)?;

    let mut buf = body.to_vec();
    cbc_decrypt_zero_iv(aes_key.expose_secret(), &mut buf)?;

    if plain_len > buf.len() {
        warn!(
            recorded = plain_len,
            available = buf.len(),
            "zero-version length suffix exceeds decrypted data"
        );
        return Err(CryptError::DecryptFailed("recorded length exceeds plaintext"));
    }
    buf.truncate(plain_len);
    Ok(buf)
}

/// Big-endian accumulation of the bytes after the last whole block.
fn read_length_suffix(suffix: &[u8]) -> Result<usize> {
    suffix.iter().try_fold(0usize, |acc, &b| {
        acc.checked_mul(256)
            .and_then(|v| v.checked_add(b as usize))
            .ok_or(CryptError::DecryptFailed("length suffix overflows"))
    })
}

fn cbc_decrypt_zero_iv(key: &[u8], buf: &mut [u8]) -> Result<()> {
    let iv = [0u8; BLOCK_SIZE];
    let result = match key.len() {
        16 => cbc::Decryptor::<Aes128>::new_from_slices(key, &iv)
            .map(|d| d.decrypt_padded_mut::<NoPadding>(buf).map(|_| ())),
        24 => cbc::Decryptor::<Aes192>::new_from_slices(key, &iv)
            .map(|d| d.decrypt_padded_mut::<NoPadding>(buf).map(|_| ())),
        32 => cbc::Decryptor::<Aes256>::new_from_slices(key, &iv)
            .map(|d| d.decrypt_padded_mut::<NoPadding>(buf).map(|_| ())),
        n => return Err(CryptError::InvalidLegacyKey(n)),
    };
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => Err(CryptError::DecryptFailed("zero-version body is not block aligned")),
        Err(_) => Err(CryptError::InvalidLegacyKey(key.len())),
    }
}
