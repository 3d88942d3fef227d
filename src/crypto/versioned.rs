// src/crypto/versioned.rs
//! Version-tagged AES-256-CBC, the engine every caller goes through
//!
//! Current format: `tag (6 ASCII bytes) || base64( IV || CBC(size-padded plaintext) )`
//! with the AES key derived per message from the master key and the IV.

use std::collections::HashMap;
use std::fmt;

use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use tracing::{debug, warn};

use crate::aliases::{LegacyKey, MasterKey};
use crate::consts::{BLOCK_SIZE, MIN_MASTER_KEY_LEN, VERSION_TAG_LEN, ZERO_VERSION_TAG};
use crate::error::{CryptError, Result};
use crate::key_ops::generate_iv;

use super::decode_base64;
use super::kdf::derive_key;
use super::legacy::zero_version_decrypt;
use super::padding::{size_pad, size_unpad};

/// Immutable keyring: the active tag and key plus every retired key.
///
/// Nothing mutates a `CipherConfig` after construction, so one instance can
/// be shared across threads behind an `Arc` or a plain reference.
pub struct CipherConfig {
    current_version: String,
    master_key: MasterKey,
    legacy_keys: HashMap<String, LegacyKey>,
}

impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.legacy_keys.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("CipherConfig")
            .field("current_version", &self.current_version)
            .field("master_key", &"[REDACTED]")
            .field("legacy_tags", &tags)
            .finish()
    }
}

/// Where a ciphertext's tag sent the decryptor
enum KeySlot<'a> {
    Current,
    Retired(&'a LegacyKey),
    ZeroVersion(&'a LegacyKey),
}

impl CipherConfig {
    /// Build a keyring. Every tag, current and legacy, must be 6 bytes.
    ///
    /// Key length is checked when a key is used, not here: a short master key
    /// still allows zero-version decryption.
    pub fn new<S, I, K>(current_version: S, master_key: Vec<u8>, legacy_keys: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (K, Vec<u8>)>,
        K: Into<String>,
    {
        let current_version = current_version.into();
        check_tag(&current_version)?;

        let legacy_keys = legacy_keys
            .into_iter()
            .map(|(tag, key)| -> Result<(String, LegacyKey)> {
                let tag: String = tag.into();
                check_tag(&tag)?;
                Ok((tag, LegacyKey::new(key)))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self {
            current_version,
            master_key: MasterKey::new(master_key),
            legacy_keys,
        })
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    pub fn has_legacy_key(&self, tag: &str) -> bool {
        self.legacy_keys.contains_key(tag)
    }

    /// Encrypt under the master key, prefixed with `version` or the current tag.
    pub fn encrypt(&self, plaintext: &[u8], version: Option<&str>) -> Result<String> {
        let tag = match version {
            Some(v) => {
                check_tag(v)?;
                v
            }
            None => self.current_version.as_str(),
        };

        let body = cbc_encrypt(plaintext, self.master_key.expose_secret())?;
        let mut out = String::with_capacity(VERSION_TAG_LEN + body.len());
        out.push_str(tag);
        out.push_str(&body);
        Ok(out)
    }

    /// Decrypt a tagged ciphertext, falling back to retired keys by tag.
    ///
    /// `version` replaces the current tag as the one that selects the master
    /// key. An unknown tag is an error; keys are never tried blindly, except
    /// that a configured `ZeroVe` key claims every untagged string.
    /// Retired tags are matched before that fallback, so untagged legacy data
    /// whose first six base64 characters equal a retired tag will not decrypt.
    pub fn decrypt(&self, ciphertext: &str, version: Option<&str>) -> Result<Vec<u8>> {
        if let Some(v) = version {
            check_tag(v)?;
        }
        let raw = ciphertext.as_bytes();
        if raw.len() < VERSION_TAG_LEN {
            return Err(CryptError::MalformedCiphertext("shorter than version tag"));
        }
        let (tag, payload) = raw.split_at(VERSION_TAG_LEN);

        match self.resolve(tag, version)? {
            KeySlot::Current => cbc_decrypt(payload, self.master_key.expose_secret()),
            KeySlot::Retired(key) => {
                debug!(tag = %String::from_utf8_lossy(tag), "decrypting with retired key");
                cbc_decrypt(payload, key.expose_secret())
            }
            KeySlot::ZeroVersion(key) => {
                debug!("no tag match, falling back to zero-version decrypt");
                zero_version_decrypt(ciphertext, key)
            }
        }
    }

    fn resolve(&self, tag: &[u8], version: Option<&str>) -> Result<KeySlot<'_>> {
        let expected = version.unwrap_or(self.current_version.as_str());
        if tag == expected.as_bytes() {
            return Ok(KeySlot::Current);
        }

        let retired = std::str::from_utf8(tag)
            .ok()
            .filter(|t| *t != ZERO_VERSION_TAG)
            .and_then(|t| self.legacy_keys.get(t));
        if let Some(key) = retired {
            return Ok(KeySlot::Retired(key));
        }

        if let Some(key) = self.legacy_keys.get(ZERO_VERSION_TAG) {
            return Ok(KeySlot::ZeroVersion(key));
        }

        let tag = String::from_utf8_lossy(tag).into_owned();
        warn!(%tag, "no key for version tag");
        Err(CryptError::UnsupportedVersion(tag))
    }
}

fn check_tag(tag: &str) -> Result<()> {
    if tag.len() != VERSION_TAG_LEN {
        return Err(CryptError::InvalidTagLength {
            tag: tag.to_owned(),
            len: tag.len(),
        });
    }
    Ok(())
}

fn check_key(key: &[u8]) -> Result<()> {
    if key.len() < MIN_MASTER_KEY_LEN {
        return Err(CryptError::KeyTooShort(key.len()));
    }
    Ok(())
}

/// base64( IV || CBC(size-padded plaintext) ) with a fresh random IV
fn cbc_encrypt(plaintext: &[u8], master_key: &[u8]) -> Result<String> {
    check_key(master_key)?;

    let iv = generate_iv(BLOCK_SIZE)?;
    let key = derive_key(master_key, &iv);

    let mut buf = size_pad(plaintext.to_vec(), BLOCK_SIZE);
    let len = buf.len();
    cbc::Encryptor::<Aes256>::new_from_slices(key.expose_secret(), &iv)
        .map_err(|_| CryptError::EncryptFailed("invalid key or IV length"))?
        .encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .map_err(|_| CryptError::EncryptFailed("padded plaintext is not block aligned"))?;

    let mut out = iv;
    out.extend_from_slice(&buf);
    Ok(STANDARD.encode(out))
}

fn cbc_decrypt(payload: &[u8], master_key: &[u8]) -> Result<Vec<u8>> {
    check_key(master_key)?;

    let decoded = decode_base64(payload)
        .map_err(|_| CryptError::MalformedCiphertext("payload is not base64"))?;
    if decoded.len() < BLOCK_SIZE {
        return Err(CryptError::MalformedCiphertext("payload shorter than IV"));
    }
    let (iv, body) = decoded.split_at(BLOCK_SIZE);
    if body.is_empty() || body.len() % BLOCK_SIZE != 0 {
        return Err(CryptError::DecryptFailed("body is not a whole number of blocks"));
    }

    let key = derive_key(master_key, iv);
    let mut buf = body.to_vec();
    cbc::Decryptor::<Aes256>::new_from_slices(key.expose_secret(), iv)
        .map_err(|_| CryptError::DecryptFailed("invalid key or IV length"))?
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| CryptError::DecryptFailed("body is not a whole number of blocks"))?;

    size_unpad(buf)
}
