// src/consts.rs
//! Shared constants — wire format and security parameters

/// Length of the ASCII version tag prefixed to current-format ciphertext
pub const VERSION_TAG_LEN: usize = 6;

/// Reserved legacy-key tag for data encrypted before version tagging existed
pub const ZERO_VERSION_TAG: &str = "ZeroVe";

/// AES block size, also the IV / salt length
pub const BLOCK_SIZE: usize = 16;

/// PBKDF2-HMAC-SHA256 iterations for per-message key derivation
pub const KDF_ITERATIONS: u32 = 10_000;

/// Derived working key length (AES-256)
pub const DERIVED_KEY_LEN: usize = 32;

/// Minimum accepted master key length for the current format
pub const MIN_MASTER_KEY_LEN: usize = 32;

/// Legacy key buckets, smallest first
pub const LEGACY_KEY_BUCKETS: [usize; 3] = [16, 24, 32];

/// Environment variable naming the keyring file
pub const CONFIG_PATH_ENV: &str = "QFCRYPT_CONFIG";

/// Environment variable overriding the master key from the keyring file
pub const MASTER_KEY_ENV: &str = "QFCRYPT_MASTER_KEY";

/// Keyring file used when `QFCRYPT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "qfcrypt.toml";
