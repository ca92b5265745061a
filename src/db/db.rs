//! Database connection handling.
//!
//! Opens the SQLite file backing the service. Schema setup lives with the
//! table modules (see [`crate::db::tasks`]).

use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Default location of the database file, relative to the working directory.
pub const DB_FILE_NAME: &str = "./task.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Db> {
        let path = path.as_ref();
        debug!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;

        Ok(Db { conn })
    }

    /// Opens a private in-memory database. Its contents vanish with the handle.
    pub fn open_in_memory() -> rusqlite::Result<Db> {
        let conn = Connection::open_in_memory()?;

        Ok(Db { conn })
    }
}
