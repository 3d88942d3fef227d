// tests/common.rs
//! Shared test utilities — logging setup and keyring fixtures
#![allow(dead_code)]

use qfcrypt::consts::ZERO_VERSION_TAG;
use qfcrypt::CipherConfig;

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 44-byte ASCII master key, used directly as key bytes
pub const MASTER_KEY: &str = "lmN4dtPyeC5r29DYBLl0P0OoA4Afy/2UnCg0zd+hHhg=";
pub const CURRENT_TAG: &str = "QFTECH";
/// Zero-version key from the original deployment (16 bytes → AES-256)
pub const ZERO_KEY: &str = "q_1dY=Khec2nMNxV";

/// Initialize test-friendly logging; idempotent
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

pub fn keyring() -> CipherConfig {
    CipherConfig::new(CURRENT_TAG, MASTER_KEY.as_bytes().to_vec(), Vec::<(String, Vec<u8>)>::new())
        .unwrap()
}

pub fn keyring_with_zero_version() -> CipherConfig {
    CipherConfig::new(
        CURRENT_TAG,
        MASTER_KEY.as_bytes().to_vec(),
        [(ZERO_VERSION_TAG, ZERO_KEY.as_bytes().to_vec())],
    )
    .unwrap()
}
