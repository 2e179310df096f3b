use std::path::Path;

use anyhow::{Context, Result};

use aquarium_management::{console, db, SessionMirror};

fn main() -> Result<()> {
    // Fatal tier: a failure here prints the error chain and exits non-zero
    // without ever entering the command loop.
    let conn = db::open_database(Path::new(db::DB_PATH))
        .context("database connection failed")?;
    db::setup_database(&conn).context("database setup failed")?;
    println!("Database setup complete.");

    let mut mirror = SessionMirror::new();
    console::run(&conn, &mut mirror)?;

    // Connection drops here on every path, releasing the database file.
    Ok(())
}
