//! One-time schema migrations for vsafe databases.
//!
//! Each migration runs inside a single transaction. SQLite DDL participates
//! in transactions, so a failure at any step rolls the whole migration back
//! and leaves the file in its pre-migration state.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::db::{column_exists, table_exists};
use crate::error::{Error, Result};

const CREATE_CATEGORY_SQL: &str =
    "CREATE TABLE category (id INTEGER PRIMARY KEY AUTOINCREMENT, owner INTEGER, name TEXT)";

const ADD_CATEGORIES_COLUMN_SQL: &str = "ALTER TABLE entry ADD COLUMN categories TEXT";

const BACKFILL_CATEGORIES_SQL: &str = "UPDATE entry SET categories = ''";

/// Add the category table and the entry.categories column.
///
/// Every entry row present before the migration ends up with
/// `categories = ''`. Running this against an already-migrated database
/// fails without changing it.
pub fn add_categories(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;

    if !table_exists(&tx, "entry")? {
        return Err(Error::MissingTable("entry"));
    }
    if table_exists(&tx, "category")? {
        return Err(Error::TableExists("category"));
    }
    if column_exists(&tx, "entry", "categories")? {
        return Err(Error::ColumnExists {
            table: "entry",
            column: "categories",
        });
    }

    debug!("creating category table");
    tx.execute(CREATE_CATEGORY_SQL, [])?;

    debug!("adding categories column to entry");
    tx.execute(ADD_CATEGORIES_COLUMN_SQL, [])?;

    let backfilled = tx.execute(BACKFILL_CATEGORIES_SQL, [])?;

    tx.commit()?;
    info!(backfilled, "categories migration committed");
    Ok(())
}
