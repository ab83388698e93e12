//! One SQLite connection per run, opened with the pragmas the store relies on.

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

/// Path that selects a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open `path`, or an in-memory database for [`MEMORY_PATH`].
    pub fn new(path: &str) -> Result<Self> {
        let conn = if path == MEMORY_PATH {
            Connection::open_in_memory()?
        } else {
            Connection::open(Path::new(path))?
        };
        Self::configure(conn)
    }

    fn configure(conn: Connection) -> Result<Self> {
        // Another officelog process may be writing at the same moment.
        conn.busy_timeout(Duration::from_secs(2))?;
        Ok(Self { conn })
    }
}
