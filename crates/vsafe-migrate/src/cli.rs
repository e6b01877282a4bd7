//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// One-time vsafe schema migration.
///
/// Adds the category table and the entry.categories column to an existing
/// vsafe database file, backfilling categories with the empty string for
/// every row already present.
#[derive(Parser, Debug)]
#[command(name = "migrate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the vsafe database file
    #[arg(value_name = "location of db file")]
    pub db_file: PathBuf,
}
