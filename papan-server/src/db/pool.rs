//! Database connection pool management
//!
//! Uses a sqlx SqlitePool over a single database file.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// SQLite serializes writers anyway; readers share the rest.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool, creating the database file if missing.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// database cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("papan.db").await?;
/// ```
pub async fn create_pool(db_path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(db_path, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
pub async fn create_pool_with_options(
    db_path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let db_path = db_path.as_ref();

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_acquires_connection() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(dir.path().join("test.db")).await.unwrap();

        let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("data").join("papan.db");

        create_pool(&db_path).await.unwrap();
        assert!(db_path.exists());
    }
}
