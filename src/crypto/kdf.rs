// src/crypto/kdf.rs
//! PBKDF2-HMAC-SHA256 per-message key derivation

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::aliases::DerivedKey32;
use crate::consts::{DERIVED_KEY_LEN, KDF_ITERATIONS};

/// Stretch `master_key` with `salt` into a 32-byte working key.
///
/// The salt is the message IV, so the same master key never yields the same
/// AES key twice. Deterministic: decryption re-derives the key from the IV it
/// reads back out of the ciphertext.
pub fn derive_key(master_key: &[u8], salt: &[u8]) -> DerivedKey32 {
    let mut out = [0u8; DERIVED_KEY_LEN];
    pbkdf2_hmac::<Sha256>(master_key, salt, KDF_ITERATIONS, &mut out);
    let key = DerivedKey32::new(out);
    out.zeroize();
    key
}
