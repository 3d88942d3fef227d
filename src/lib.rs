// src/lib.rs
//! qfcrypt — versioned symmetric encryption with key rotation
//!
//! Features:
//! - AES-256-CBC with a PBKDF2-HMAC-SHA256 key derived per message
//! - 6-byte version tags so retired keys stay usable after rotation
//! - Byte-exact decryption of the untagged zero-version legacy format
//! - zeroizing wrappers for every key held in memory
//!
//! Neither format carries an integrity tag: this is confidentiality only.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod key_ops;

// Re-export everything users need at the crate root
pub use config::{load as load_config, load_from_env, KeyringSettings};
pub use crypto::CipherConfig;
pub use error::{CryptError, Result};
pub use key_ops::{generate_iv, generate_master_key};
