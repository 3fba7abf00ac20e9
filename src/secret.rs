//! Installation secret storage.
//!
//! The secret is created once per installation and stored in
//! `<data dir>/secret.json`. It is read-only while the tool is serving and
//! is never sent to callers; only tokens derived from it are.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable that overrides the stored secret
pub const SECRET_ENV: &str = "TEMPLATE_TOOL_SECRET";

/// File name of the stored secret inside the data directory
pub const SECRET_FILE: &str = "secret.json";

/// Random bytes in a freshly generated secret
const SECRET_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse secret file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Secret file {path:?} does not contain valid base64: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: base64::DecodeError,
    },
    #[error("Secret file {0:?} contains an empty secret")]
    Empty(PathBuf),
    #[error("Failed to serialize secret: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk format of secret.json
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretFile {
    secret: String,
    created_at: String,
}

/// Where the active secret came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    Environment,
    File(PathBuf),
}

/// Process-wide installation secret.
#[derive(Clone)]
pub struct InstallationSecret {
    key: Vec<u8>,
    source: SecretSource,
    created_at: Option<String>,
}

impl InstallationSecret {
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn source(&self) -> &SecretSource {
        &self.source
    }

    /// RFC 3339 creation time; unknown for secrets from the environment.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl std::fmt::Debug for InstallationSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallationSecret")
            .field("key", &"<redacted>")
            .field("source", &self.source)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Secret store rooted at a data directory
pub struct SecretStore {
    secret_path: PathBuf,
}

impl SecretStore {
    /// Create a store, creating the data directory if needed.
    pub fn new(data_dir: &Path) -> Result<Self, SecretError> {
        fs::create_dir_all(data_dir).map_err(|source| SecretError::Io {
            path: data_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            secret_path: data_dir.join(SECRET_FILE),
        })
    }

    pub fn secret_path(&self) -> &Path {
        &self.secret_path
    }

    /// Whether a secret file has been written for this installation
    pub fn is_installed(&self) -> bool {
        self.secret_path.exists()
    }

    /// Load the active secret, if any.
    ///
    /// Priority:
    /// 1. TEMPLATE_TOOL_SECRET environment variable
    /// 2. secret.json in the data directory
    pub fn load(&self) -> Result<Option<InstallationSecret>, SecretError> {
        self.load_with_override(std::env::var(SECRET_ENV).ok())
    }

    fn load_with_override(
        &self,
        env_secret: Option<String>,
    ) -> Result<Option<InstallationSecret>, SecretError> {
        if let Some(raw) = env_secret.filter(|s| !s.is_empty()) {
            info!("Using installation secret from {} environment variable", SECRET_ENV);
            return Ok(Some(InstallationSecret {
                key: raw.into_bytes(),
                source: SecretSource::Environment,
                created_at: None,
            }));
        }

        if !self.secret_path.exists() {
            return Ok(None);
        }

        self.read_file().map(Some)
    }

    /// Load the active secret, generating and storing one on first use.
    pub fn load_or_create(&self) -> Result<InstallationSecret, SecretError> {
        match self.load()? {
            Some(secret) => Ok(secret),
            None => {
                info!("No installation secret found, creating one");
                self.regenerate()
            }
        }
    }

    /// Write a fresh secret to disk, replacing any existing one.
    ///
    /// Tokens issued from the previous secret stop validating.
    pub fn regenerate(&self) -> Result<InstallationSecret, SecretError> {
        let mut key = vec![0u8; SECRET_BYTES];
        rand::thread_rng().fill_bytes(&mut key);

        let file = SecretFile {
            secret: STANDARD.encode(&key),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        self.write_private(content.as_bytes())
            .map_err(|source| SecretError::Io {
                path: self.secret_path.clone(),
                source,
            })?;
        // A file left over from an older install keeps its mode on truncate
        self.restrict_permissions()?;

        info!("Installation secret written to {:?}", self.secret_path);

        Ok(InstallationSecret {
            key,
            source: SecretSource::File(self.secret_path.clone()),
            created_at: Some(file.created_at),
        })
    }

    /// Write the secret file, creating it owner-only so it is never
    /// readable by others, not even briefly.
    fn write_private(&self, content: &[u8]) -> std::io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.secret_path)?;
        file.write_all(content)?;
        file.sync_all()
    }

    fn read_file(&self) -> Result<InstallationSecret, SecretError> {
        let content = fs::read_to_string(&self.secret_path).map_err(|source| SecretError::Io {
            path: self.secret_path.clone(),
            source,
        })?;

        let file: SecretFile =
            serde_json::from_str(&content).map_err(|source| SecretError::Parse {
                path: self.secret_path.clone(),
                source,
            })?;

        let key = STANDARD
            .decode(file.secret.trim())
            .map_err(|source| SecretError::Decode {
                path: self.secret_path.clone(),
                source,
            })?;

        if key.is_empty() {
            return Err(SecretError::Empty(self.secret_path.clone()));
        }

        debug!("Loaded installation secret from {:?}", self.secret_path);

        Ok(InstallationSecret {
            key,
            source: SecretSource::File(self.secret_path.clone()),
            created_at: Some(file.created_at),
        })
    }

    #[cfg(unix)]
    fn restrict_permissions(&self) -> Result<(), SecretError> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(&self.secret_path, fs::Permissions::from_mode(0o600)).map_err(
            |source| SecretError::Io {
                path: self.secret_path.clone(),
                source,
            },
        )
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> Result<(), SecretError> {
        Ok(())
    }
}
