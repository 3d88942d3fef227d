// src/config/defaults.rs
use std::path::PathBuf;

use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, MASTER_KEY_ENV};

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn master_key_override() -> Option<String> {
    std::env::var(MASTER_KEY_ENV).ok().filter(|k| !k.is_empty())
}
