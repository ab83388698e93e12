//! User-facing status lines. Errors go to stderr, everything else to stdout.

use ansi_term::{Colour, Style};
use std::fmt;

fn tag(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, "ℹ️"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, "✅"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, "⚠️"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, "❌"), msg);
}

/// Next step to run, in grey.
pub fn hint<T: fmt::Display>(msg: T) {
    println!("   {}", Colour::Fixed(244).paint(msg.to_string()));
}

/// Day header on the status screen.
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("── {} ──", msg);
    println!("{}\n", Style::new().bold().fg(Colour::Blue).paint(line));
}
