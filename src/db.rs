use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Database file used by the CLI. Connection parameters are fixed at build
/// time; there is no runtime configuration.
pub const DB_PATH: &str = "aquarium.db";

/// Open the SQLite database, creating the file if it does not exist.
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    // Enable WAL mode for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;

    Ok(conn)
}

/// Create both record tables. Safe to call on every startup: `IF NOT EXISTS`
/// makes this a no-op once the tables are in place.
///
/// The two tables are independent; there is no foreign key between them.
pub fn setup_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS aquatic_animals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            habitat TEXT NOT NULL,
            size REAL NOT NULL,
            age INTEGER NOT NULL,
            zone TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create aquatic_animals table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS visitors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact TEXT NOT NULL,
            ticket_count INTEGER NOT NULL,
            visit_date TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create visitors table")?;

    Ok(())
}
