//! Typed access to the logical records kept in the key-value store.
//!
//! Each record is a full JSON snapshot. Reads never fail on bad data: a
//! missing or unparsable value is reported as absent and the caller falls
//! back to its default.

use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::models::entry_log::EntryLog;
use crate::models::pending::PendingSubmission;
use crate::models::settings::AppSettings;
use crate::models::todo_item::{TodoItem, default_todos};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const ENTRY_LOG_KEY: &str = "office_entry_log";
pub const TODO_ITEMS_KEY: &str = "office_todo_items";
pub const SETTINGS_KEY: &str = "office_settings";
pub const PENDING_KEY: &str = "office_pending_submission";

pub struct Storage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable record");
                Ok(None)
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    // ---------------------------
    // Entry log
    // ---------------------------
    pub fn entry_log(&self) -> AppResult<Option<EntryLog>> {
        self.read(ENTRY_LOG_KEY)
    }

    pub fn save_entry_log(&mut self, log: &EntryLog) -> AppResult<()> {
        self.write(ENTRY_LOG_KEY, log)
    }

    pub fn clear_entry_log(&mut self) -> AppResult<()> {
        self.store.remove(ENTRY_LOG_KEY)
    }

    // ---------------------------
    // Pending submission
    // ---------------------------
    pub fn pending(&self) -> AppResult<Option<PendingSubmission>> {
        self.read(PENDING_KEY)
    }

    pub fn save_pending(&mut self, pending: &PendingSubmission) -> AppResult<()> {
        self.write(PENDING_KEY, pending)
    }

    pub fn clear_pending(&mut self) -> AppResult<()> {
        self.store.remove(PENDING_KEY)
    }

    // ---------------------------
    // Todo items
    // ---------------------------

    /// Stored items, or the default set when nothing usable is stored.
    pub fn todo_items(&self, now: DateTime<Utc>) -> AppResult<Vec<TodoItem>> {
        Ok(self
            .read(TODO_ITEMS_KEY)?
            .unwrap_or_else(|| default_todos(now)))
    }

    pub fn save_todo_items(&mut self, items: &[TodoItem]) -> AppResult<()> {
        self.write(TODO_ITEMS_KEY, &items)
    }

    // ---------------------------
    // Settings
    // ---------------------------
    pub fn settings(&self) -> AppResult<AppSettings> {
        Ok(self.read(SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save_settings(&mut self, settings: &AppSettings) -> AppResult<()> {
        self.write(SETTINGS_KEY, settings)
    }
}
