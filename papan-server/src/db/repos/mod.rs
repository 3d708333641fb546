//! Repository implementations for database access
//!
//! Repositories borrow the shared pool; handlers construct them per request.

pub mod boards;
pub mod items;

pub use boards::{Board, BoardRepo};
pub use items::{Item, ItemRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
