pub mod config;
pub mod db;
pub mod entry;
pub mod exit;
pub mod init;
pub mod log;
pub mod reset;
pub mod settings;
pub mod status;
pub mod submit;
pub mod todo;

use crate::config::Config;
use crate::core::storage::Storage;
use crate::db::log::ttlog;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the configured database as record storage.
pub(crate) fn open_storage(cfg: &Config) -> AppResult<Storage<SqliteStore>> {
    Ok(Storage::new(SqliteStore::open(&cfg.database)?))
}

/// Append an audit line; a failure here never fails the command.
pub(crate) fn audit(storage: &Storage<SqliteStore>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(storage.store().conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
