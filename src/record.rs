//! Part record - the persisted lookup-table row
//!
//! One row per part number. The table is disposable: a successful import
//! discards every existing row and inserts the newly parsed set, there is
//! no incremental merge.

use serde::{Deserialize, Serialize};

/// A part record stored in the lookup table.
///
/// `part_number` is the primary key; inserts use replace-on-conflict
/// semantics. `location` is required for a record to be accepted during
/// import; rows without one are skipped, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Unique part number, primary key of the store
    pub part_number: String,
    /// Free-text display payload, may be empty
    pub description: String,
    /// Physical storage location (EMP location)
    pub location: String,
    /// On-hand quantity; unused by current import formats, defaults to 0
    pub quantity: i64,
    /// Harmonized/alternate part number, populated only by spreadsheet import
    pub new_reference: Option<String>,
}

impl PartRecord {
    /// Create a record with the fields both import paths fill in.
    pub fn new(part_number: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            description: String::new(),
            location: location.into(),
            quantity: 0,
            new_reference: None,
        }
    }

    /// Attach a harmonized reference (spreadsheet import only).
    pub fn with_new_reference(mut self, new_reference: Option<String>) -> Self {
        self.new_reference = new_reference;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_defaults() {
        let record = PartRecord::new("A1", "Shelf2");
        assert_eq!(record.part_number, "A1");
        assert_eq!(record.location, "Shelf2");
        assert_eq!(record.description, "");
        assert_eq!(record.quantity, 0);
        assert_eq!(record.new_reference, None);
    }

    #[test]
    fn test_with_new_reference() {
        let record = PartRecord::new("4123", "B7").with_new_reference(Some("H-4123".into()));
        assert_eq!(record.new_reference.as_deref(), Some("H-4123"));
    }
}
