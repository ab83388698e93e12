use crate::errors::{AppError, AppResult};
use crate::models::todo_item::{TodoItem, default_todos};
use crate::utils::time::normalize_hhmm;
use chrono::{DateTime, Utc};

/// The to-do list, kept sorted by time of day.
///
/// Times are zero-padded `HH:MM`, so plain string order is time order. The
/// sort is stable: items sharing a time keep their relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoLedger {
    items: Vec<TodoItem>,
}

impl TodoLedger {
    pub fn new(items: Vec<TodoItem>) -> Self {
        let mut ledger = Self { items };
        ledger.sort();
        ledger
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn add(&mut self, description: &str, time: &str, now: DateTime<Utc>) -> AppResult<TodoItem> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::EmptyDescription);
        }
        let time = normalize_hhmm(time)?;

        let item = TodoItem::new(&time, description, now);
        self.items.push(item.clone());
        self.sort();
        Ok(item)
    }

    /// Flip the completed flag; returns the new value.
    pub fn toggle_complete(&mut self, id: &str) -> AppResult<bool> {
        let item = self.find_mut(id)?;
        item.completed = !item.completed;
        let completed = item.completed;
        self.sort();
        Ok(completed)
    }

    pub fn delete(&mut self, id: &str) -> AppResult<TodoItem> {
        let idx = self
            .items
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::TodoNotFound(id.to_string()))?;
        let removed = self.items.remove(idx);
        self.sort();
        Ok(removed)
    }

    /// Move an item to `time`; returns the normalized time.
    pub fn update_time(&mut self, id: &str, time: &str) -> AppResult<String> {
        let time = normalize_hhmm(time)?;
        self.find_mut(id)?.time = time.clone();
        self.sort();
        Ok(time)
    }

    /// Replace everything with the default items.
    pub fn clear_all(&mut self, now: DateTime<Utc>) {
        self.items = default_todos(now);
        self.sort();
    }

    /// Resolve a user reference: an exact id, or the 1-based position shown by `todo list`.
    pub fn resolve(&self, reference: &str) -> AppResult<String> {
        let reference = reference.trim();

        if let Some(item) = self.items.iter().find(|t| t.id == reference) {
            return Ok(item.id.clone());
        }

        reference
            .parse::<usize>()
            .ok()
            .and_then(|pos| pos.checked_sub(1))
            .and_then(|idx| self.items.get(idx))
            .map(|t| t.id.clone())
            .ok_or_else(|| AppError::TodoNotFound(reference.to_string()))
    }

    fn find_mut(&mut self, id: &str) -> AppResult<&mut TodoItem> {
        self.items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::TodoNotFound(id.to_string()))
    }

    fn sort(&mut self) {
        self.items.sort_by(|a, b| a.time.cmp(&b.time));
    }
}
