//! Tabular (spreadsheet) import
//!
//! Rows come from the first worksheet of an XLSX workbook. Unlike the
//! delimited path, the header row is skipped unconditionally and the layout
//! is positional: column 0 part number, column 1 harmonized reference
//! (optional), column 2 location.

use crate::record::PartRecord;
use crate::storage::SqliteStore;
use crate::{Error, Result};
use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;

/// A spreadsheet cell, reduced to the kinds the importer understands.
///
/// Anything that is neither text nor a number yields an absent value for
/// its field.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Other,
}

impl Cell {
    /// Render the cell as trimmed field text. Empty text and unsupported
    /// cell kinds are absent.
    fn text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Cell::Number(f) => Some(render_number(*f)),
            Cell::Other => None,
        }
    }
}

/// Render a numeric cell as plain text, never in scientific notation.
///
/// XLSX stores part numbers like 1000000 as floats; formatting integral
/// values through i64 guarantees `1000000`, not `1E6`.
fn render_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Parse spreadsheet rows into records. Row 0 is the header and is skipped
/// without inspection; rows missing a part number or location are skipped.
pub fn parse_tabular<I>(rows: I) -> Vec<PartRecord>
where
    I: IntoIterator<Item = Vec<Cell>>,
{
    let mut records = Vec::new();
    for row in rows.into_iter().skip(1) {
        let Some(part_number) = row.first().and_then(Cell::text) else {
            tracing::debug!("skipping row without part number");
            continue;
        };
        let new_reference = row.get(1).and_then(Cell::text);
        let Some(location) = row.get(2).and_then(Cell::text) else {
            tracing::debug!(part_number = %part_number, "skipping row without location");
            continue;
        };

        records.push(PartRecord::new(part_number, location).with_new_reference(new_reference));
    }
    records
}

/// Parse spreadsheet rows and atomically replace the store contents.
pub fn import_tabular<I>(store: &mut SqliteStore, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = Vec<Cell>>,
{
    let records = parse_tabular(rows);
    let count = store.replace_all(&records)?;
    tracing::info!(count, "tabular import complete");
    Ok(count)
}

/// Import the first worksheet of an XLSX workbook at `path`.
///
/// Workbook open/parse faults surface before the store is touched.
pub fn import_xlsx_path(store: &mut SqliteStore, path: &Path) -> Result<usize> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::InvalidFormat("workbook has no sheets".to_string()))??;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>());
    import_tabular(store, rows)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        _ => Cell::Other,
    }
}
