//! Schema creation
//!
//! `CREATE ... IF NOT EXISTS` only. Running this against a populated
//! database leaves existing rows untouched.

use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("schema.sql");

/// Create the `board` and `item` tables if they are absent.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, BoardRepo, ItemRepo};
    use crate::models::{NewBoard, NewItem};

    #[tokio::test]
    async fn rerun_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(dir.path().join("test.db")).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let board = BoardRepo::new(&pool)
            .create(NewBoard::from_form(Some("Travel".into()), Some("Trips".into())).unwrap())
            .await
            .unwrap();
        ItemRepo::new(&pool)
            .create(board.id, NewItem::from_form(Some("Sunset".into()), None).unwrap(), None)
            .await
            .unwrap();

        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let boards = BoardRepo::new(&pool).list_public().await.unwrap();
        assert_eq!(boards.len(), 1);
        let items = ItemRepo::new(&pool).list_for_board(board.id).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        {
            let pool = create_pool(&db_path).await.unwrap();
            ensure_schema(&pool).await.unwrap();
            BoardRepo::new(&pool)
                .create(NewBoard::from_form(Some("Kept".into()), None).unwrap())
                .await
                .unwrap();
            pool.close().await;
        }

        let pool = create_pool(&db_path).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let boards = BoardRepo::new(&pool).list_public().await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "Kept");
    }
}
