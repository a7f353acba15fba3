//! Delimited-text (CSV) import
//!
//! The expected file is a two-column export: a header line followed by one
//! `part,location` pair per line. No quoting or escaping is supported; the
//! upstream export never produces it.

use crate::record::PartRecord;
use crate::storage::SqliteStore;
use crate::{Error, Result};
use std::io::BufRead;

/// Required header line, compared case-insensitively
pub const EXPECTED_HEADER: &str = "PartNumber,EMP_Location";

/// Parse delimited lines into records. The first line must be the expected
/// header; rows with fewer than two fields or an empty location are skipped.
pub fn parse_delimited<R: BufRead>(reader: R) -> Result<Vec<PartRecord>> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(Error::InvalidFormat(format!(
                "empty file, expected header: {EXPECTED_HEADER}"
            )));
        }
    };
    if !header.eq_ignore_ascii_case(EXPECTED_HEADER) {
        return Err(Error::InvalidFormat(format!(
            "unexpected header {header:?}, expected: {EXPECTED_HEADER}"
        )));
    }

    let mut records = Vec::new();
    for line in lines {
        let line = line?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            tracing::debug!(line = %line, "skipping short row");
            continue;
        }

        let part_number = fields[0].trim();
        let location = fields[1].trim();
        if location.is_empty() {
            tracing::debug!(part_number, "skipping row without location");
            continue;
        }

        records.push(PartRecord::new(part_number, location));
    }

    Ok(records)
}

/// Parse delimited input and atomically replace the store contents.
///
/// Returns the number of records inserted. On a header or I/O fault the
/// store is left untouched.
pub fn import_delimited<R: BufRead>(store: &mut SqliteStore, reader: R) -> Result<usize> {
    let records = parse_delimited(reader)?;
    let count = store.replace_all(&records)?;
    tracing::info!(count, "delimited import complete");
    Ok(count)
}
