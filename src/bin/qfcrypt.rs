// src/bin/qfcrypt.rs
//! qfcrypt: encrypt, decrypt, or migrate one value with the configured keyring
//!
//! Usage: qfcrypt <encrypt|decrypt|rotate|genkey> [INPUT_FILE]
//! Input is read from INPUT_FILE or stdin; a single trailing newline is dropped.

use std::io::{Read, Write};

use anyhow::{bail, Context, Result};
use qfcrypt::{generate_master_key, load_from_env, CipherConfig};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let command = Command::parse(&args.next().unwrap_or_default())?;
    let input = read_input(args.next())?;

    let mut stdout = std::io::stdout().lock();
    match command {
        Command::GenKey => {
            let key = generate_master_key(&input).context("key generation failed")?;
            writeln!(stdout, "{key}")?;
        }
        Command::Encrypt => {
            let cipher = open_keyring()?;
            let out = cipher.encrypt(&input, None).context("encrypt failed")?;
            writeln!(stdout, "{out}")?;
        }
        Command::Decrypt => {
            let cipher = open_keyring()?;
            let text = String::from_utf8(input).context("ciphertext is not UTF-8")?;
            let plain = cipher.decrypt(&text, None).context("decrypt failed")?;
            stdout.write_all(&plain)?;
            writeln!(stdout)?;
        }
        Command::Rotate => {
            let cipher = open_keyring()?;
            let text = String::from_utf8(input).context("ciphertext is not UTF-8")?;
            let out = cipher.reencrypt(&text).context("re-encrypt failed")?;
            writeln!(stdout, "{out}")?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encrypt,
    Decrypt,
    Rotate,
    GenKey,
}

impl Command {
    /// Checked before any input is read, so a typo never waits on stdin
    fn parse(name: &str) -> Result<Self> {
        Ok(match name {
            "encrypt" => Self::Encrypt,
            "decrypt" => Self::Decrypt,
            "rotate" => Self::Rotate,
            "genkey" => Self::GenKey,
            other => bail!("unknown command {other:?}; expected encrypt, decrypt, rotate or genkey"),
        })
    }
}

fn open_keyring() -> Result<CipherConfig> {
    let settings = load_from_env().context("failed to load keyring; is QFCRYPT_CONFIG set?")?;
    let cipher = settings.into_cipher()?;
    info!(version = cipher.current_version(), "keyring loaded");
    Ok(cipher)
}

fn read_input(path: Option<String>) -> Result<Vec<u8>> {
    let mut data = match path {
        Some(p) => std::fs::read(&p).with_context(|| format!("cannot read {p}"))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    if data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }
    Ok(data)
}
