use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Calendar day of `now` as seen in the display offset.
pub fn today_in(now: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    now.with_timezone(offset).date_naive()
}

/// Parse a fixed UTC offset: `+05:30`, `-0300`, `+02`, `Z` or `UTC`.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let raw = s.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidOffset(s.to_string()));
    }

    let invalid = || AppError::InvalidOffset(s.to_string());

    let (sign, rest) = match raw.chars().next() {
        Some('+') => (1, &raw[1..]),
        Some('-') => (-1, &raw[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
        4 => (
            digits[..2].parse::<i32>().map_err(|_| invalid())?,
            digits[2..].parse::<i32>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parse a user supplied entry time.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM` or a bare `HH:MM`. The last two are
/// read in the display offset; a bare time refers to `now`'s calendar day.
pub fn parse_timestamp(s: &str, now: DateTime<Utc>, offset: &FixedOffset) -> AppResult<DateTime<Utc>> {
    let raw = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        ndt
    } else if let Some(t) = crate::utils::time::parse_time(raw) {
        today_in(now, offset).and_time(t)
    } else {
        return Err(AppError::InvalidTime(s.to_string()));
    };

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}
