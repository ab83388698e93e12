use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub time: String, // "HH:MM", zero padded
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(time: &str, description: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(now),
            time: time.to_string(),
            description: description.to_string(),
            completed: false,
            created_at: now,
        }
    }
}

/// `<unix-millis>-<9 random hex chars>`: unique enough for a single user's list.
pub fn generate_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now.timestamp_millis(), &suffix[..9])
}

/// The four items the list starts with, and falls back to after a clear.
pub fn default_todos(now: DateTime<Utc>) -> Vec<TodoItem> {
    [
        ("09:00", "Send morning emails"),
        ("10:00", "Team standup meeting"),
        ("14:00", "Review pending tasks"),
        ("17:00", "End of day summary"),
    ]
    .into_iter()
    .map(|(time, description)| TodoItem::new(time, description, now))
    .collect()
}
