//! SQLite storage implementation

use super::schema;
use crate::Result;
use crate::record::PartRecord;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// SQLite-backed store for the part lookup table
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Record Operations ==========

    /// Insert or replace a part record
    pub fn insert_record(&self, record: &PartRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO parts (part_number, description, location, quantity, new_reference)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                record.part_number,
                record.description,
                record.location,
                record.quantity,
                record.new_reference,
            ],
        )?;
        Ok(())
    }

    /// Get a record by part number
    pub fn get_record(&self, part_number: &str) -> Result<Option<PartRecord>> {
        self.conn
            .query_row(
                "SELECT part_number, description, location, quantity, new_reference FROM parts WHERE part_number = ?1",
                [part_number],
                |row| Self::row_to_record(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get all records, ordered by part number
    pub fn all_records(&self) -> Result<Vec<PartRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT part_number, description, location, quantity, new_reference FROM parts ORDER BY part_number",
        )?;

        let records = stmt
            .query_map([], |row| Self::row_to_record(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Count all records
    pub fn count_records(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM parts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a PartRecord
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<PartRecord> {
        Ok(PartRecord {
            part_number: row.get(0)?,
            description: row.get(1)?,
            location: row.get(2)?,
            quantity: row.get(3)?,
            new_reference: row.get(4)?,
        })
    }

    // ========== Bulk Operations ==========

    /// Replace the entire table contents with `records` as one atomic unit.
    ///
    /// The clear and the inserts run inside a single transaction, so a
    /// concurrent reader sees either the old table or the new one, never a
    /// state in between. On any failure the transaction rolls back and the
    /// previous contents remain intact.
    pub fn replace_all(&mut self, records: &[PartRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM parts", [])?;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT OR REPLACE INTO parts (part_number, description, location, quantity, new_reference)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )?;
            for record in records {
                stmt.execute(params![
                    record.part_number,
                    record.description,
                    record.location,
                    record.quantity,
                    record.new_reference,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            records: self.count_records()?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub records: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        write!(f, "  Part records: {}", self.records)
    }
}
