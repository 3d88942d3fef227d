// src/key_ops.rs
//! Key and IV generation
//!
//! Randomness comes straight from the OS generator, which is safe to call
//! from any number of threads at once.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::consts::BLOCK_SIZE;
use crate::crypto::derive_key;
use crate::error::{CryptError, Result};

/// `len` bytes from the OS CSPRNG
pub fn generate_iv(len: usize) -> Result<Vec<u8>> {
    let mut iv = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CryptError::Random(e.to_string()))?;
    Ok(iv)
}

/// New master key: base64 of `origin` stretched with a random salt.
///
/// The 44-character result is used as-is (its ASCII bytes) for the master key.
pub fn generate_master_key(origin: &[u8]) -> Result<String> {
    let salt = generate_iv(BLOCK_SIZE)?;
    let key = derive_key(origin, &salt);
    Ok(STANDARD.encode(key.expose_secret()))
}
