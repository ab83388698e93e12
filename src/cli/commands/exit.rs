use crate::cli::commands::{audit, open_storage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator;
use crate::core::clock::SystemClock;
use crate::core::day::DayTracker;
use crate::errors::AppResult;
use crate::models::pending::SubmissionForm;
use crate::ui::messages::{hint, info, success};
use crate::utils::formatting::format_12h;

/// Mark today's exit; the form hand-off stays pending until `submit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Exit { company, comment } = cmd {
        let offset = cfg.offset()?;
        let form = SubmissionForm {
            company_name: company.clone().unwrap_or_default(),
            comment: comment.clone().unwrap_or_default(),
        };

        let mut storage = open_storage(cfg)?;
        let log = DayTracker::new(&mut storage, &SystemClock, offset).mark_exit(form)?;

        let exit_shown = log
            .exit_time
            .map(|t| format_12h(t, &offset))
            .unwrap_or_default();
        audit(&storage, "exit", &log.date_str(), &format!("Exit marked at {}", exit_shown));

        success(format!("Exit marked at {}.", exit_shown));
        if let Some(total) = calculator::total_duration(Some(&log)) {
            info(format!("Total duration: {}", total));
        }
        hint("Run `officelog submit` to open the pre-filled form, or `officelog submit --cancel` to undo the exit.");
    }

    Ok(())
}
