/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Placeholder shown for a value that does not exist yet.
pub const EMPTY_FIELD: &str = "--:--";

/// Grey placeholder for a missing value, the value itself otherwise.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}{EMPTY_FIELD}{RESET}"),
    }
}

/// Entry times in green, exit times in red, placeholders in grey.
pub fn colorize_in_out(value: Option<&str>, is_in: bool) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => {
            let color = if is_in { GREEN } else { RED };
            format!("{color}{v}{RESET}")
        }
        _ => colorize_optional(None),
    }
}
