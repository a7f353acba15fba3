//! Database schema definitions
//!
//! Schema changes are destructive: there is no in-place migration, the
//! table is simply recreated on the next import cycle.

/// SQL to create the parts table
pub const CREATE_PARTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS parts (
    part_number TEXT PRIMARY KEY,
    description TEXT NOT NULL DEFAULT '',
    location TEXT NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 0,
    new_reference TEXT
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_parts_location ON parts(location)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_PARTS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
