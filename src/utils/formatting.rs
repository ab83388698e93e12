//! Formatting utilities used for CLI output and the form link.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// 12-hour display used everywhere a timestamp is shown to the user,
/// e.g. `01/01/2024, 08:30:00 PM`.
pub fn format_12h(ts: DateTime<Utc>, offset: &FixedOffset) -> String {
    ts.with_timezone(offset)
        .format("%d/%m/%Y, %I:%M:%S %p")
        .to_string()
}

/// 24-hour `YYYY-MM-DD HH:MM`, the format the external form expects.
pub fn format_form_timestamp(ts: DateTime<Utc>, offset: &FixedOffset) -> String {
    ts.with_timezone(offset).format("%Y-%m-%d %H:%M").to_string()
}

/// `"H hr M min"` from one hour up, `"M min"` below. Negative spans read as zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total_minutes = elapsed.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{} hr {} min", hours, minutes)
    } else {
        format!("{} min", minutes)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
