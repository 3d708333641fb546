//! Item repository

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewItem;

/// Item record from database
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub board_id: i64,
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an item on a board. Callers load the board first, so
    /// `board_id` always references an existing row.
    pub async fn create(
        &self,
        board_id: i64,
        item: NewItem,
        image_url: Option<String>,
    ) -> Result<Item, DbError> {
        let created = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO item (title, content, image_url, board_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, content, image_url, board_id
            "#,
        )
        .bind(item.title.as_str())
        .bind(item.content.as_deref())
        .bind(image_url.as_deref())
        .bind(board_id)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Items of one board in insertion order.
    pub async fn list_for_board(&self, board_id: i64) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, content, image_url, board_id
            FROM item
            WHERE board_id = ?
            ORDER BY id
            "#,
        )
        .bind(board_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Count all items.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM item")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
