//! Portal credentials, plaintext or encrypted at rest.
//!
//! The encrypted form is base64(nonce || AES-256-GCM ciphertext) of the
//! plaintext JSON, keyed by SHA-256 of the user's master key. Key management
//! beyond "environment variable or local key file" is deliberately out of
//! scope; pick whichever your machine setup makes safest.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ConfigError;

const NONCE_LEN: usize = 12;
const KEY_SALT: &[u8] = b"roombook-credentials-v1";

#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Load plaintext `credentials.json`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let credentials: Credentials =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        credentials.validate()?;
        debug!(target = "roombook", user = %credentials.username, "credentials loaded");
        Ok(credentials)
    }

    /// Load an encrypted credentials blob written by `encrypt_to_file`.
    pub fn load_encrypted(path: &Path, key: &MasterKey) -> Result<Self, ConfigError> {
        let decrypt_err = |reason: String| ConfigError::Decrypt {
            path: path.to_path_buf(),
            reason,
        };

        let encoded = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let blob = BASE64
            .decode(encoded.trim())
            .map_err(|e| decrypt_err(format!("not valid base64: {e}")))?;
        if blob.len() < NONCE_LEN {
            return Err(decrypt_err("blob too short to hold a nonce".into()));
        }

        let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
        let cipher = Aes256Gcm::new_from_slice(&key.cipher_key())
            .map_err(|e| decrypt_err(e.to_string()))?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| decrypt_err("wrong key or corrupted blob".into()))?;

        let credentials: Credentials =
            serde_json::from_slice(&plaintext).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        credentials.validate()?;
        debug!(target = "roombook", user = %credentials.username, "encrypted credentials loaded");
        Ok(credentials)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::EmptyField("username"));
        }
        if self.password.is_empty() {
            return Err(ConfigError::EmptyField("password"));
        }
        Ok(())
    }
}

// The password must never leak through debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Encrypt credentials to `path`, owner-readable only on Unix.
pub fn encrypt_to_file(
    credentials: &Credentials,
    path: &Path,
    key: &MasterKey,
) -> Result<(), ConfigError> {
    let plaintext =
        serde_json::to_vec(credentials).map_err(|e| ConfigError::Encrypt(e.to_string()))?;

    let cipher = Aes256Gcm::new_from_slice(&key.cipher_key())
        .map_err(|e| ConfigError::Encrypt(e.to_string()))?;
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_slice())
        .map_err(|e| ConfigError::Encrypt(e.to_string()))?;

    let mut blob = nonce_bytes.to_vec();
    blob.extend_from_slice(&ciphertext);

    std::fs::write(path, BASE64.encode(&blob)).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600));
    }

    debug!(target = "roombook", path = %path.display(), "encrypted credentials written");
    Ok(())
}

/// User-supplied master key for the encrypted credentials file.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey(String);

impl MasterKey {
    pub fn new(key: impl Into<String>) -> Self {
        MasterKey(key.into())
    }

    /// A `--key-file` wins over the `ROOMBOOK_KEY` environment variable.
    pub fn resolve(key_file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = key_file {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::MissingKey);
            }
            return Ok(MasterKey(trimmed.to_string()));
        }

        match std::env::var("ROOMBOOK_KEY") {
            Ok(value) if !value.trim().is_empty() => Ok(MasterKey(value)),
            _ => Err(ConfigError::MissingKey),
        }
    }

    fn cipher_key(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        hasher.update(KEY_SALT);
        let digest = hasher.finalize();
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);
        key
    }
}
