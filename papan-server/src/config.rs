//! Server configuration
//!
//! Defaults mirror a local development setup: database file and upload
//! directory relative to the working directory. A TOML file may override
//! any subset of keys; the CLI layers flags and env vars on top.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default request body limit, large enough for phone photos.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Server configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: papan.db)
    pub db_path: PathBuf,

    /// Directory holding uploaded images (default: static/uploads)
    pub upload_dir: PathBuf,

    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            db_path: PathBuf::from("papan.db"),
            upload_dir: PathBuf::from("static/uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.db_path, PathBuf::from("papan.db"));
        assert_eq!(config.upload_dir, PathBuf::from("static/uploads"));
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:8080"
            upload_dir = "/var/lib/papan/uploads"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/papan/uploads"));
        assert_eq!(config.db_path, PathBuf::from("papan.db"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::from_toml_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papan.toml");
        std::fs::write(&path, "bind_addr = 42").unwrap();

        let err = ServerConfig::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
