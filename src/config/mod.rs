// src/config/mod.rs
//! Keyring configuration for qfcrypt
//!
//! TOML file + env overrides, turned into a caller-owned `CipherConfig`.

pub use app::{load, load_from_env, KeyringSettings};

mod app;
mod defaults;
