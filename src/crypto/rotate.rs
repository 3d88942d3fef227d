// src/crypto/rotate.rs
use tracing::debug;

use crate::error::Result;

use super::versioned::CipherConfig;

impl CipherConfig {
    /// Pure in-memory migration: any readable ciphertext → current tag and key
    ///
    /// Accepts current, retired-tag, and zero-version input. Output that is
    /// already under the current tag is re-encrypted anyway with a fresh IV.
    pub fn reencrypt(&self, ciphertext: &str) -> Result<String> {
        let plaintext = self.decrypt(ciphertext, None)?;
        debug!(to = self.current_version(), "re-encrypting under current key");
        self.encrypt(&plaintext, None)
    }
}
