//! migrate - one-time vsafe schema migration CLI.
//!
//! Opens the database file given on the command line, adds the category
//! table and the entry.categories column in one transaction, and exits.
//! Nothing is written to stdout on success; errors go to stderr with a
//! non-zero exit status.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vsafe_core::Database;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    // Logs are opt-in via RUST_LOG and always go to stderr, keeping stdout
    // silent on success.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut db = Database::open_path(&cli.db_file)
        .with_context(|| format!("Failed to open database at {}", cli.db_file.display()))?;
    db.add_categories()
        .with_context(|| format!("Migration failed for {}", cli.db_file.display()))?;

    Ok(())
}
