//! Direct SQLite database access for the vsafe maintenance tools.
//!
//! Unlike the vsafe application itself, the maintenance tools never create a
//! database: [`Database::open_path`] requires the file to already exist and
//! be writable.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;
use crate::migrations;

/// Database connection wrapper.
///
/// Owns the single connection for a maintenance run. The connection is
/// released when the value drops.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing vsafe database file read/write.
    ///
    /// Fails if the file is missing, unreadable, or not a SQLite database.
    pub fn open_path(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        // Reading sqlite_master forces the header read, so a file that is
        // not a database fails here rather than mid-migration.
        let _: i64 = conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| row.get(0))?;
        Ok(Self { conn })
    }

    /// Add the category table and the entry.categories column.
    pub fn add_categories(&mut self) -> Result<()> {
        migrations::add_categories(&mut self.conn)
    }
}

/// Check whether a table exists in the database.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: u32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Check whether a column exists on a table.
pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let count: u32 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
        [table, column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
