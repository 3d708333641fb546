//! papan-server: HTTP server for inspiration boards
//!
//! Public boards hold titled items with optional images. Boards and items
//! live in a SQLite file; uploaded images live in a plain directory and are
//! served back under `/uploads`.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod uploads;

pub use config::{ConfigError, ServerConfig};
pub use http::{build_router, run_server, AppState, ServerError};
