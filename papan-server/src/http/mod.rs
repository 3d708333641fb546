//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered pages (minijinja)
//! - Upload serving from disk
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod views;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
