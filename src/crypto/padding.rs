// src/crypto/padding.rs
//! Block alignment for both wire formats
//!
//! Size padding (current format) appends `n` copies of the byte `n`, always
//! 1..=block_size of them. Zero padding (legacy format) appends zero bytes and
//! cannot be stripped on its own: the legacy trailer records the true length.

use crate::error::{CryptError, Result};

/// Append size padding; aligned input still gains a full block.
pub fn size_pad(mut data: Vec<u8>, block_size: usize) -> Vec<u8> {
    let padding = block_size - data.len() % block_size;
    // block_size never exceeds 255 for AES
    data.resize(data.len() + padding, padding as u8);
    data
}

/// Strip size padding in place.
///
/// Only the trailing count byte is checked. This catches gross corruption,
/// it does not authenticate anything.
pub fn size_unpad(mut data: Vec<u8>) -> Result<Vec<u8>> {
    let count = match data.last() {
        Some(&n) => n as usize,
        None => return Err(CryptError::PaddingInvalid),
    };
    if count == 0 || count > data.len() {
        return Err(CryptError::PaddingInvalid);
    }
    data.truncate(data.len() - count);
    Ok(data)
}

/// Append zero bytes up to the next multiple of `block_size`.
///
/// Like the historical routine this pads aligned input with a full block.
pub fn zero_pad(mut data: Vec<u8>, block_size: usize) -> Vec<u8> {
    data.resize(zero_padded_len(data.len(), block_size), 0);
    data
}

/// Length `zero_pad` produces for `len` input bytes
pub fn zero_padded_len(len: usize, block_size: usize) -> usize {
    len + block_size - len % block_size
}
