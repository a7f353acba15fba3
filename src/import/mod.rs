//! Record import pipelines
//!
//! Two formats refresh the lookup table: delimited text (CSV) and
//! spreadsheet rows (XLSX). Both are full-replace imports: the parsed set
//! replaces the entire table as one atomic unit, and a parse or I/O fault
//! leaves the store untouched. Rows that fail per-row validation are
//! skipped silently; only the returned count reflects them.

pub mod delimited;
pub mod tabular;

use crate::Result;
use crate::storage::SqliteStore;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use delimited::import_delimited;
pub use tabular::{Cell, import_tabular, import_xlsx_path};

/// Supported import file kinds, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
}

impl FileKind {
    /// Detect the file kind from a path's extension, case-insensitively.
    /// Returns `None` for anything this importer does not understand.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(FileKind::Csv),
            "xlsx" => Some(FileKind::Xlsx),
            _ => None,
        }
    }
}

/// Import a file of a known kind, replacing the store contents.
pub fn import_path(store: &mut SqliteStore, path: &Path, kind: FileKind) -> Result<usize> {
    match kind {
        FileKind::Csv => {
            let file = File::open(path)?;
            import_delimited(store, BufReader::new(file))
        }
        FileKind::Xlsx => import_xlsx_path(store, path),
    }
}
