//! Schema initialization command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use papan_server::db::{create_pool, ensure_schema, BoardRepo, ItemRepo};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file
    #[arg(long, env = "PAPAN_DB_PATH", default_value = "papan.db")]
    pub db_path: PathBuf,
}

/// Create missing tables and report what the store holds
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = create_pool(&args.db_path)
        .await
        .with_context(|| format!("Failed to open database {}", args.db_path.display()))?;

    ensure_schema(&pool)
        .await
        .context("Failed to create schema")?;

    let boards = BoardRepo::new(&pool).count().await?;
    let items = ItemRepo::new(&pool).count().await?;
    tracing::info!(db = %args.db_path.display(), boards, items, "Database initialized");

    pool.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("papan.db");

        for _ in 0..2 {
            run_init_db(InitDbArgs {
                db_path: db_path.clone(),
            })
            .await
            .unwrap();
        }

        assert!(db_path.exists());
    }
}
