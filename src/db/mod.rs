//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (SQLite, in-memory, etc.)
//! to be swapped without changing business logic.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Item, TodoList)
//! - `repository`: Trait definitions for data access
//! - `defaults`: Placeholder content seeding
//! - `sqlite`: SQLx-backed implementation

mod defaults;
mod error;
mod models;
mod repository;
pub mod sqlite;
pub mod utils;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod models_test;

pub use defaults::{DEFAULT_ITEM_NAMES, default_items, ensure_defaults};
pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
