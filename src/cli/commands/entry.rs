use crate::cli::commands::{audit, open_storage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator;
use crate::core::clock::{Clock, SystemClock};
use crate::core::day::DayTracker;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_timestamp;
use crate::utils::formatting::format_12h;

/// Mark today's entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry { at } = cmd {
        let offset = cfg.offset()?;
        let clock = SystemClock;

        let at = at
            .as_deref()
            .map(|s| parse_timestamp(s, clock.now(), &offset))
            .transpose()?;

        let mut storage = open_storage(cfg)?;
        let work_hours = storage.settings()?.default_work_hours;

        let log = DayTracker::new(&mut storage, &clock, offset).mark_entry(at)?;

        let shown = format_12h(log.entry_time, &offset);
        audit(&storage, "entry", &log.date_str(), &format!("Entry marked at {}", shown));

        success(format!("Entry marked at {}.", shown));
        if let Some(expected) = calculator::calculated_exit_time(Some(&log), work_hours, &offset) {
            info(format!("Expected exit after {} h: {}", work_hours, expected));
        }
    }

    Ok(())
}
