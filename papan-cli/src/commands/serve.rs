//! HTTP server command
//!
//! Settings come from, lowest to highest precedence: built-in defaults,
//! an optional TOML file, then flags (or their env vars).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use papan_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(long, short = 'c', env = "PAPAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "PAPAN_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (default: papan.db)
    #[arg(long, env = "PAPAN_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Directory for uploaded images (default: static/uploads)
    #[arg(long, env = "PAPAN_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Maximum request body size in bytes
    #[arg(long, env = "PAPAN_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: Option<usize>,
}

impl ServeArgs {
    /// Merge file config and flags into the final server config.
    pub fn resolve_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_toml_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(db_path) = &self.db_path {
            config.db_path = db_path.clone();
        }
        if let Some(upload_dir) = &self.upload_dir {
            config.upload_dir = upload_dir.clone();
        }
        if let Some(max) = self.max_upload_bytes {
            config.max_upload_bytes = max;
        }

        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.resolve_config()?;

    tracing::info!(
        bind = %config.bind_addr,
        db = %config.db_path.display(),
        uploads = %config.upload_dir.display(),
        "Starting papan server"
    );

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
