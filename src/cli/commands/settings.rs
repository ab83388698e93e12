use crate::cli::commands::{audit, open_storage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::settings::AppSettings;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, RESET};

fn print_settings(settings: &AppSettings) {
    println!("{}• Work hours:{} {}", CYAN, RESET, settings.default_work_hours);
    println!("{}• Exit time:{}  {}", CYAN, RESET, settings.exit_calculator_time);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        work_hours,
        exit_time,
    } = cmd
    {
        let mut storage = open_storage(cfg)?;
        let current = storage.settings()?;

        if work_hours.is_none() && exit_time.is_none() {
            print_settings(&current);
            return Ok(());
        }

        let mut updated = current;
        if let Some(h) = work_hours {
            updated = updated.with_work_hours(*h)?;
        }
        if let Some(t) = exit_time {
            updated = updated.with_exit_time(t)?;
        }
        storage.save_settings(&updated)?;

        audit(
            &storage,
            "settings",
            "",
            &format!(
                "work hours {}, exit time {}",
                updated.default_work_hours, updated.exit_calculator_time
            ),
        );
        success("Settings updated.");
        print_settings(&updated);
    }

    Ok(())
}
