// src/aliases.rs
//! Secret wrappers for every key held by this crate
//!
//! Zeroized on drop, redacted in `Debug`, and only readable through
//! `expose_secret()`.

use std::fmt;

use zeroize::Zeroizing;

macro_rules! secret_alias {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        pub struct $name(Zeroizing<$inner>);

        impl $name {
            pub fn new(value: $inner) -> Self {
                Self(Zeroizing::new(value))
            }

            pub fn expose_secret(&self) -> &$inner {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "([REDACTED])"))
            }
        }
    };
}

// Fixed-size secrets
secret_alias!(
    /// Per-message AES-256 key from PBKDF2
    DerivedKey32,
    [u8; 32]
);

// Dynamic secrets
secret_alias!(
    /// Long-term key, never used directly by AES
    MasterKey,
    Vec<u8>
);
secret_alias!(
    /// Retired key, looked up by version tag
    LegacyKey,
    Vec<u8>
);
secret_alias!(
    /// Zero-padded zero-version AES key
    LegacyAesKey,
    Vec<u8>
);
