//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    // ---------------------------
    // Day lifecycle
    // ---------------------------
    #[error("You have already submitted your entry/exit for today. You can make a new entry tomorrow.")]
    AlreadySubmitted,

    #[error("You have already marked entry for today. Please mark exit first.")]
    AlreadyEntered,

    #[error("Please mark entry first before exit!")]
    NotEntered,

    #[error("You have already marked exit for today.")]
    AlreadyExited,

    #[error("Exit has not been marked yet.")]
    NotExited,

    #[error("There is no pending submission for today. Mark exit first.")]
    NoPendingSubmission,

    #[error("The form link has not been built yet. Run `submit` first.")]
    LinkNotBuilt,

    #[error("The form link was already built. Use `submit --done` or `submit --abandon`.")]
    LinkAlreadyBuilt,

    // ---------------------------
    // To-do ledger
    // ---------------------------
    #[error("Please enter a todo description")]
    EmptyDescription,

    #[error("Todo not found: {0}")]
    TodoNotFound(String),

    // ---------------------------
    // Settings & config errors
    // ---------------------------
    #[error("Invalid work hours: {0} (expected a value between 0 and 24)")]
    InvalidWorkHours(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
