//! Board repository
//!
//! - create: single INSERT ... RETURNING, `public` left to its column default
//! - list_public: filter on the `public` flag, insertion order

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewBoard;

/// Board record from database
#[derive(Debug, Clone, FromRow)]
pub struct Board {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub public: bool,
}

/// Board repository
pub struct BoardRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BoardRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new board. New boards are always public.
    pub async fn create(&self, board: NewBoard) -> Result<Board, DbError> {
        let created = sqlx::query_as::<_, Board>(
            r#"
            INSERT INTO board (name, description)
            VALUES (?, ?)
            RETURNING id, name, description, public
            "#,
        )
        .bind(board.name.as_str())
        .bind(board.description.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Get a single board by id.
    pub async fn get(&self, id: i64) -> Result<Board, DbError> {
        sqlx::query_as::<_, Board>(
            "SELECT id, name, description, public FROM board WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "board",
            id: id.to_string(),
        })
    }

    /// List all public boards.
    pub async fn list_public(&self) -> Result<Vec<Board>, DbError> {
        let boards = sqlx::query_as::<_, Board>(
            r#"
            SELECT id, name, description, public
            FROM board
            WHERE public = 1
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(boards)
    }

    /// Count all boards, public or not.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM board")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
