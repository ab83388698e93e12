use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day's entry/exit record, stored under `office_entry_log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryLog {
    pub entry_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<DateTime<Utc>>,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(default)]
    pub is_submitted: bool,
}

impl EntryLog {
    pub fn new(entry_time: DateTime<Utc>, date: NaiveDate) -> Self {
        Self {
            entry_time,
            exit_time: None,
            date,
            is_submitted: false,
        }
    }

    /// `true` when this record belongs to `today`.
    pub fn is_for(&self, today: NaiveDate) -> bool {
        self.date == today
    }

    pub fn with_exit(&self, exit_time: DateTime<Utc>) -> Self {
        Self {
            exit_time: Some(exit_time),
            ..self.clone()
        }
    }

    pub fn without_exit(&self) -> Self {
        Self {
            exit_time: None,
            ..self.clone()
        }
    }

    pub fn submitted(&self) -> Self {
        Self {
            is_submitted: true,
            ..self.clone()
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
