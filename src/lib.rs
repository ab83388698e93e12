//! officelog library root.
//! Exposes the CLI parser, the high-level run() function, and the day
//! lifecycle, calculator and to-do modules behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Entry { .. } => cli::commands::entry::handle(&cli.command, cfg),
        Commands::Exit { .. } => cli::commands::exit::handle(&cli.command, cfg),
        Commands::Submit { .. } => cli::commands::submit::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Todo { .. } => cli::commands::todo::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::logging::enable_logging();

    let cli = Cli::parse();

    // Configuration is loaded once per run.
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    tracing::debug!(database = %cfg.database, "configuration loaded");
    dispatch(&cli, &cfg)
}
