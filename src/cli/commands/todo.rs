use crate::cli::commands::{ask_confirmation, audit, open_storage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::todo::TodoLedger;
use crate::errors::AppResult;
use crate::models::todo_item::TodoItem;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, GREY, RESET};

const DEFAULT_TIME: &str = "09:00";

fn print_list(items: &[TodoItem]) {
    if items.is_empty() {
        info("No to-do items.");
        return;
    }

    let pos_w = items.len().to_string().len();
    for (i, item) in items.iter().enumerate() {
        let (mark, color) = if item.completed {
            ("[x]", GREY)
        } else {
            ("[ ]", RESET)
        };
        println!(
            "{:>pos_w$}. {GREEN}{}{RESET} {} {color}{}{RESET}  {GREY}{}{RESET}",
            i + 1,
            item.time,
            mark,
            item.description,
            item.id,
            pos_w = pos_w
        );
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Todo {
        list,
        add,
        time,
        toggle,
        del,
        set,
        clear,
        yes,
    } = cmd
    {
        let now = SystemClock.now();
        let mut storage = open_storage(cfg)?;
        let mut ledger = TodoLedger::new(storage.todo_items(now)?);

        if let Some(description) = add {
            let item = ledger.add(description, time.as_deref().unwrap_or(DEFAULT_TIME), now)?;
            storage.save_todo_items(ledger.items())?;
            audit(&storage, "todo_add", &item.id, &format!("{} {}", item.time, item.description));
            success(format!("Added \"{}\" at {}.", item.description, item.time));
        } else if let Some(reference) = toggle {
            let id = ledger.resolve(reference)?;
            let completed = ledger.toggle_complete(&id)?;
            storage.save_todo_items(ledger.items())?;
            let state = if completed { "completed" } else { "not completed" };
            audit(&storage, "todo_toggle", &id, state);
            success(format!("Marked as {}.", state));
        } else if let Some(reference) = del {
            let id = ledger.resolve(reference)?;
            let removed = ledger.delete(&id)?;
            storage.save_todo_items(ledger.items())?;
            audit(&storage, "todo_del", &id, &removed.description);
            success(format!("Deleted \"{}\".", removed.description));
        } else if let (Some(reference), Some(new_time)) = (set, time) {
            let id = ledger.resolve(reference)?;
            let new_time = ledger.update_time(&id, new_time)?;
            storage.save_todo_items(ledger.items())?;
            audit(&storage, "todo_time", &id, &new_time);
            success(format!("Time updated to {}.", new_time));
        } else if *clear {
            if !*yes
                && !ask_confirmation(
                    "Clear all todos? This will restore the default todos.",
                )
            {
                info("Operation cancelled.");
                return Ok(());
            }
            ledger.clear_all(now);
            storage.save_todo_items(ledger.items())?;
            audit(&storage, "todo_clear", "", "Default todos restored");
            success("To-do list restored to defaults.");
        } else {
            print_list(ledger.items());
            return Ok(());
        }

        if *list {
            print_list(ledger.items());
        }
    }

    Ok(())
}
