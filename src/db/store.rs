//! Key-value persistence adapter.
//!
//! Records are opaque strings addressed by key, the same contract a browser's
//! local storage offers. `SqliteStore` keeps them in the `kv` table of the app
//! database; `MemoryStore` keeps them in a map for tests.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, creating the schema if needed.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Stored keys with the size of their value, ordered by key.
    pub fn entries(&self) -> AppResult<Vec<(String, usize, String)>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key, length(value), updated_at FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (key, len, updated_at) = r?;
            out.push((key, usize::try_from(len).unwrap_or(0), updated_at));
        }
        Ok(out)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }
}
