use crate::db::log::load_rows;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Color of an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "entry" => Colour::Green,
        "exit" => Colour::Red,
        "submit" | "submitted" => Colour::Blue,
        "abandon" | "cancel" | "reset" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("todo_") => Colour::Cyan,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_rows(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let mut op_target = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                op_target.push_str(&format!(" ({})", e.target));
            }

            // Truncate on the visible text; only the operation keeps its color.
            let visible = strip_ansi(&op_target);
            let shown = if visible.chars().count() > MAX_OP_WIDTH {
                let cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
                format!("{cut}...")
            } else {
                visible
            };
            let visible_len = shown.chars().count();
            let recolored = match shown.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(shown.as_str()).to_string(),
            };
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                recolored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
