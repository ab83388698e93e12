pub mod entry_log;
pub mod pending;
pub mod settings;
pub mod todo_item;
