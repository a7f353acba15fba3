//! Persistent storage for part records

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, SqliteStore};
