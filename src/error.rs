// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptError {
    #[error("version tag must be exactly 6 bytes, got {len}: {tag:?}")]
    InvalidTagLength { tag: String, len: usize },

    #[error("key must be at least 32 bytes, got {0}")]
    KeyTooShort(usize),

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(&'static str),

    #[error("invalid padding")]
    PaddingInvalid,

    #[error("no key available for version tag {0:?}")]
    UnsupportedVersion(String),

    #[error("decrypt failed: {0}")]
    DecryptFailed(&'static str),

    #[error("encrypt failed: {0}")]
    EncryptFailed(&'static str),

    #[error("legacy key of {0} bytes cannot be formatted into an AES key")]
    InvalidLegacyKey(usize),

    #[error("secure random source failed: {0}")]
    Random(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid keyring config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CryptError>;
