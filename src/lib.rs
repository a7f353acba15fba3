//! # Partlookup - Warehouse Part Number Resolution
//!
//! Resolve a scanned or typed part number to its storage location, using a
//! locally maintained lookup table that is bulk-refreshed from uploaded
//! CSV or XLSX files.
//!
//! Partlookup provides:
//! - Prefix-rewrite normalization reconciling two historical part-numbering schemes
//! - Two-stage lookup (normalized key, then original-string fallback)
//! - Full-replace import pipelines for delimited text and spreadsheet rows
//! - SQLite-backed record store with atomic replacement
//! - An observable `Idle/Loading/Success/Error` operation state machine

pub mod config;
pub mod import;
pub mod normalize;
pub mod record;
pub mod resolver;
pub mod scan;
pub mod service;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use normalize::normalize;
pub use record::PartRecord;
pub use resolver::{Resolution, Resolver};
pub use service::{LookupService, LookupState};
pub use storage::SqliteStore;

/// Result type alias for partlookup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for partlookup operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Import header/shape mismatch. The store is left untouched.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),
}
