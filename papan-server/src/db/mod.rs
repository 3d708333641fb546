//! Database layer - connection pool, schema and repositories
//!
//! - SQLite file through a small sqlx pool
//! - Schema creation is an explicit startup step, safe to repeat
//! - One INSERT per logical operation, no multi-record transactions

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;
pub use schema::ensure_schema;
