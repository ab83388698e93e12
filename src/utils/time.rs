//! Time utilities: parsing and normalizing HH:MM values.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Validate an `HH:MM` value and return it zero padded ("9:05" → "09:05"),
/// so that string order matches time order.
pub fn normalize_hhmm(t: &str) -> AppResult<String> {
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(parsed.format("%H:%M").to_string())
}
