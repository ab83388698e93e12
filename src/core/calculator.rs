//! Display values derived from today's record and a clock reading.
//!
//! Everything here is a pure function: nothing is stored, and a missing input
//! yields `None` instead of an error.

use crate::models::entry_log::EntryLog;
use crate::utils::formatting::{format_12h, format_elapsed};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};

/// `log` restricted to `today`: a record from another day counts as missing.
pub fn todays(log: Option<&EntryLog>, today: NaiveDate) -> Option<&EntryLog> {
    log.filter(|l| l.is_for(today))
}

pub fn has_entered_today(log: Option<&EntryLog>, today: NaiveDate) -> bool {
    todays(log, today).is_some()
}

pub fn has_exited_today(log: Option<&EntryLog>, today: NaiveDate) -> bool {
    todays(log, today).is_some_and(|l| l.exit_time.is_some())
}

pub fn is_submitted_today(log: Option<&EntryLog>, today: NaiveDate) -> bool {
    todays(log, today).is_some_and(|l| l.is_submitted)
}

pub fn entry_time_display(log: Option<&EntryLog>, offset: &FixedOffset) -> Option<String> {
    log.map(|l| format_12h(l.entry_time, offset))
}

pub fn exit_time_display(log: Option<&EntryLog>, offset: &FixedOffset) -> Option<String> {
    log.and_then(|l| l.exit_time)
        .map(|t| format_12h(t, offset))
}

/// Entry time plus `work_hours` (fractional hours allowed).
pub fn calculated_exit_time(
    log: Option<&EntryLog>,
    work_hours: f64,
    offset: &FixedOffset,
) -> Option<String> {
    let log = log?;
    let span = work_span(work_hours)?;
    let projected = log.entry_time.checked_add_signed(span)?;
    Some(format_12h(projected, offset))
}

pub fn duration_since_entry(log: Option<&EntryLog>, now: DateTime<Utc>) -> Option<String> {
    log.map(|l| format_elapsed(now - l.entry_time))
}

pub fn total_duration(log: Option<&EntryLog>) -> Option<String> {
    let log = log?;
    let exit = log.exit_time?;
    Some(format_elapsed(exit - log.entry_time))
}

fn work_span(work_hours: f64) -> Option<TimeDelta> {
    if !work_hours.is_finite() {
        return None;
    }
    let millis = (work_hours * 3_600_000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64)
}

/// Everything the status screen shows, computed in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayView {
    pub today: Option<NaiveDate>,
    pub has_entered: bool,
    pub has_exited: bool,
    pub is_submitted: bool,
    pub entry_time: Option<String>,
    pub exit_time: Option<String>,
    pub calculated_exit_time: Option<String>,
    pub duration_since_entry: Option<String>,
    pub total_duration: Option<String>,
}

impl DayView {
    pub fn compute(
        log: Option<&EntryLog>,
        work_hours: f64,
        now: DateTime<Utc>,
        offset: &FixedOffset,
    ) -> Self {
        let today = crate::utils::date::today_in(now, offset);
        let log = todays(log, today);

        Self {
            today: Some(today),
            has_entered: has_entered_today(log, today),
            has_exited: has_exited_today(log, today),
            is_submitted: is_submitted_today(log, today),
            entry_time: entry_time_display(log, offset),
            exit_time: exit_time_display(log, offset),
            calculated_exit_time: calculated_exit_time(log, work_hours, offset),
            duration_since_entry: duration_since_entry(log, now),
            total_duration: total_duration(log),
        }
    }

    /// The live clock matters only while the day is open.
    pub fn is_ticking(&self) -> bool {
        self.has_entered && !self.has_exited
    }
}
