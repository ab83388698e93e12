use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::hint;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Ok(());
    };

    if !*print {
        hint("Use `officelog log --print` to show the audit trail.");
        return Ok(());
    }

    let storage = open_storage(cfg)?;
    LogLogic::print_log(storage.store().conn())
}
