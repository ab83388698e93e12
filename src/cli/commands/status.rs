use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::DayView;
use crate::core::clock::{Clock, SystemClock};
use crate::core::day::{DayState, DayTracker};
use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, hint, info};
use crate::utils::colors::{colorize_in_out, colorize_optional, CYAN, RESET};
use crate::utils::formatting::{bold, pad_right};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const LABEL_W: usize = 18;

fn row(label: &str, value: String) {
    println!("  {}{}{} : {}", CYAN, pad_right(label, LABEL_W), RESET, value);
}

fn render(view: &DayView, state: DayState, work_hours: f64) {
    let today = view
        .today
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    header(format!("{} ({})", bold(&today), state.label()));

    row("Entry time", colorize_in_out(view.entry_time.as_deref(), true));
    row(
        &format!("Expected exit {}h", work_hours),
        colorize_optional(view.calculated_exit_time.as_deref()),
    );
    row(
        "Time since entry",
        colorize_optional(view.duration_since_entry.as_deref()),
    );
    row("Exit time", colorize_in_out(view.exit_time.as_deref(), false));
    row(
        "Total duration",
        colorize_optional(view.total_duration.as_deref()),
    );
    println!();
}

/// Redraw the time since entry every second until the day stops ticking:
/// an exit recorded by another `officelog` run, a reset, or midnight.
fn watch<S: KeyValueStore, C: Clock>(tracker: &DayTracker<S, C>, work_hours: f64) -> AppResult<()> {
    loop {
        let view = tracker.view(work_hours)?;
        if !view.is_ticking() {
            println!();
            match view.total_duration {
                Some(total) => info(format!("Exit marked. Total duration: {}", total)),
                None => info("No open entry for today any more."),
            }
            return Ok(());
        }

        print!(
            "\r⏱  Time since entry: {:<20}",
            view.duration_since_entry.unwrap_or_default()
        );
        io::stdout().flush()?;
        thread::sleep(Duration::from_secs(1));
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch: follow } = cmd {
        let offset = cfg.offset()?;

        let mut storage = open_storage(cfg)?;
        let work_hours = storage.settings()?.default_work_hours;
        let tracker = DayTracker::new(&mut storage, &SystemClock, offset);
        let state = tracker.state()?;
        let view = tracker.view(work_hours)?;
        render(&view, state, work_hours);

        match state {
            DayState::NoEntry => hint("Run `officelog entry` to mark today's entry."),
            DayState::Entered => hint("Run `officelog exit` when you leave."),
            DayState::PendingConfirmation => {
                hint("Run `officelog submit` to build the form link, or `submit --cancel`.")
            }
            DayState::AwaitingAcknowledgement => {
                hint("Run `officelog submit --done` or `officelog submit --abandon`.")
            }
            DayState::Submitted => {}
        }

        if *follow && view.is_ticking() {
            watch(&tracker, work_hours)?;
        }
    }

    Ok(())
}
