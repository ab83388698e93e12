use crate::cli::commands::{ask_confirmation, audit, open_storage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::day::DayTracker;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !ask_confirmation("Forget today's entry/exit record? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let offset = cfg.offset()?;
        let mut storage = open_storage(cfg)?;
        let mut tracker = DayTracker::new(&mut storage, &SystemClock, offset);
        let date = tracker.today().format("%Y-%m-%d").to_string();
        tracker.reset()?;

        audit(&storage, "reset", &date, "Entry log cleared");
        success("Entry log cleared.");
    }

    Ok(())
}
