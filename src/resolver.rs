//! Lookup resolution
//!
//! The resolver turns a raw scanned/typed string into a resolution outcome.
//!
//! Resolution order:
//! 1. Reject empty input outright
//! 2. Normalize the raw string into a lookup key
//! 3. Primary lookup on the normalized key
//! 4. Fallback lookup on the original raw string, only when the normalized
//!    key starts with `4` (covers numbers that legitimately begin with `4`
//!    and were rewritten, or vice versa)

use crate::Result;
use crate::normalize::normalize;
use crate::record::PartRecord;
use crate::storage::SqliteStore;

/// First line of the formatted result payload
const TITLE_LINE: &str = "Part details";

/// Outcome of resolving a raw input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record matched, with the formatted display text
    Found {
        record: PartRecord,
        display: String,
    },
    /// Valid lookup, no matching record
    NotFound(String),
    /// Unusable input (empty string / unsupported file kind upstream)
    Rejected(String),
}

/// Resolves raw part numbers against the record store
pub struct Resolver<'a> {
    store: &'a SqliteStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Resolve a raw scanned/typed string to a storage location.
    ///
    /// Storage faults propagate as `Err`; `NotFound` and `Rejected` are
    /// ordinary outcomes, not errors.
    pub fn resolve(&self, raw: &str) -> Result<Resolution> {
        if raw.is_empty() {
            return Ok(Resolution::Rejected("unsupported input".to_string()));
        }

        let key = normalize(raw);
        tracing::debug!(raw, key = %key, "looking up part number");

        let mut record = self.store.get_record(&key)?;

        // Numbers that legitimately begin with 4 may be stored under the
        // original string rather than the rewritten key.
        if record.is_none() && key.starts_with('4') {
            record = self.store.get_record(raw)?;
        }

        match record {
            Some(record) => {
                let display = format_display(&key, &record);
                Ok(Resolution::Found { record, display })
            }
            None => {
                tracing::warn!(key = %key, "part not found");
                Ok(Resolution::NotFound(format!(
                    "Part not found.\nNumber scanned: {key}"
                )))
            }
        }
    }
}

/// Build the multi-line display payload for a matched record.
///
/// Keys in the `4` range carry the harmonized reference line; everything
/// else gets the two-line body.
fn format_display(key: &str, record: &PartRecord) -> String {
    if key.starts_with('4') {
        format!(
            "{TITLE_LINE}\nscanned part number: {key}\nNew reference: {}\nEMP location: {}",
            record.new_reference.as_deref().unwrap_or("N/A"),
            record.location,
        )
    } else {
        format!(
            "{TITLE_LINE}\nscanned part number: {key}\nEMP location: {}",
            record.location,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(records: &[PartRecord]) -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        for record in records {
            store.insert_record(record).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_input_rejected() {
        let store = store_with(&[]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("").unwrap() {
            Resolution::Rejected(message) => assert_eq!(message, "unsupported input"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_found_via_normalized_key() {
        let store = store_with(&[PartRecord::new("4123", "B7")]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("P4123").unwrap() {
            Resolution::Found { record, .. } => assert_eq!(record.part_number, "4123"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_found_via_original_string_fallback() {
        // Stored under the un-normalized number only
        let store = store_with(&[PartRecord::new("P4123", "C2")]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("P4123").unwrap() {
            Resolution::Found { record, .. } => assert_eq!(record.part_number, "P4123"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_no_fallback_outside_the_4_range() {
        // Key "PZ99" does not start with 4, so no second lookup happens
        let store = store_with(&[PartRecord::new("PZ99-raw", "D1")]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("PZ99").unwrap() {
            Resolution::NotFound(message) => {
                assert_eq!(message, "Part not found.\nNumber scanned: PZ99");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_display_text_for_4_range_key() {
        let record =
            PartRecord::new("4123", "B7").with_new_reference(Some("H-4123".to_string()));
        let store = store_with(&[record]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("P4123").unwrap() {
            Resolution::Found { display, .. } => {
                assert_eq!(
                    display,
                    "Part details\nscanned part number: 4123\nNew reference: H-4123\nEMP location: B7"
                );
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_display_text_defaults_missing_reference_to_na() {
        let store = store_with(&[PartRecord::new("4555", "A9")]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("4555").unwrap() {
            Resolution::Found { display, .. } => {
                assert!(display.contains("New reference: N/A"));
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_display_text_outside_4_range_has_no_reference_line() {
        let store = store_with(&[PartRecord::new("P0123", "E4")]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("P0123").unwrap() {
            Resolution::Found { display, .. } => {
                assert_eq!(
                    display,
                    "Part details\nscanned part number: P0123\nEMP location: E4"
                );
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_reports_normalized_key() {
        let store = store_with(&[]);
        let resolver = Resolver::new(&store);

        match resolver.resolve("PP777").unwrap() {
            Resolution::NotFound(message) => {
                assert_eq!(message, "Part not found.\nNumber scanned: P777");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
