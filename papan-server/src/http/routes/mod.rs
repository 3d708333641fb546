//! Route handlers organized by resource

pub mod boards;
pub mod health;
pub mod items;
