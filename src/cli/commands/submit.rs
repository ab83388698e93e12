use crate::cli::commands::{audit, open_storage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::day::DayTracker;
use crate::errors::AppResult;
use crate::ui::messages::{hint, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        done,
        abandon,
        cancel,
    } = cmd
    {
        let offset = cfg.offset()?;
        let mut storage = open_storage(cfg)?;
        let mut tracker = DayTracker::new(&mut storage, &SystemClock, offset);

        if *done {
            let log = tracker.acknowledge_submitted()?;
            audit(&storage, "submitted", &log.date_str(), "Form submission confirmed");
            success("Entry/exit submitted for today. See you tomorrow!");
        } else if *abandon {
            let log = tracker.acknowledge_abandoned()?;
            audit(&storage, "abandon", &log.date_str(), "Form closed without submitting, exit reverted");
            warning("Form not submitted: exit reverted. Mark exit again when you leave.");
        } else if *cancel {
            let log = tracker.cancel_pending()?;
            audit(&storage, "cancel", &log.date_str(), "Pending exit cancelled");
            info("Pending exit cancelled.");
        } else {
            let link = tracker.confirm_and_build_link(&cfg.form_spec())?;
            let date = tracker.today().format("%Y-%m-%d").to_string();
            audit(&storage, "submit", &date, "Form link issued");

            info("Open this link and send the form:");
            println!("\n{}\n", link);
            hint("Then run `officelog submit --done`, or `officelog submit --abandon` if you closed it without sending.");
        }
    }

    Ok(())
}
