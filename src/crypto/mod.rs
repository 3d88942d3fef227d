// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no global state
//!
//! All functions work exclusively on in-memory buffers.
pub mod kdf;
pub mod legacy;
pub mod padding;
mod rotate;
mod versioned;

pub use kdf::derive_key;
pub use legacy::{format_legacy_key, zero_version_decrypt};
pub use padding::{size_pad, size_unpad, zero_pad, zero_padded_len};
pub use versioned::CipherConfig;

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine};

/// Standard base64, skipping CR/LF so line-wrapped stored values still decode
pub(crate) fn decode_base64(input: &[u8]) -> std::result::Result<Vec<u8>, DecodeError> {
    if input.iter().any(|&b| b == b'\r' || b == b'\n') {
        let joined: Vec<u8> = input
            .iter()
            .copied()
            .filter(|&b| b != b'\r' && b != b'\n')
            .collect();
        STANDARD.decode(joined)
    } else {
        STANDARD.decode(input)
    }
}
