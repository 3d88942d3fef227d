// src/config/app.rs
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::defaults::{config_path, master_key_override};
use crate::crypto::CipherConfig;
use crate::error::Result;

/// On-disk keyring. Key strings are used as their raw UTF-8 bytes.
#[derive(Clone, Deserialize)]
pub struct KeyringSettings {
    pub current_version: String,
    pub master_key: String,
    #[serde(default)]
    pub legacy_keys: BTreeMap<String, String>,
}

impl fmt::Debug for KeyringSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyringSettings")
            .field("current_version", &self.current_version)
            .field("master_key", &"[REDACTED]")
            .field("legacy_tags", &self.legacy_keys.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl KeyringSettings {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate tags and build the engine
    pub fn into_cipher(self) -> Result<CipherConfig> {
        CipherConfig::new(
            self.current_version,
            self.master_key.into_bytes(),
            self.legacy_keys
                .into_iter()
                .map(|(tag, key)| (tag, key.into_bytes())),
        )
    }
}

/// Read a keyring file
pub fn load<P: AsRef<Path>>(path: P) -> Result<KeyringSettings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let settings = KeyringSettings::from_toml(&content)?;
    debug!(path = %path.display(), ?settings, "loaded keyring");
    Ok(settings)
}

/// Read the keyring named by `QFCRYPT_CONFIG` (default `qfcrypt.toml`)
///
/// `QFCRYPT_MASTER_KEY`, when set, replaces the file's master key.
pub fn load_from_env() -> Result<KeyringSettings> {
    let mut settings = load(config_path())?;
    if let Some(key) = master_key_override() {
        info!("master key taken from environment");
        settings.master_key = key;
    }
    Ok(settings)
}
