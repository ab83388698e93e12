use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if (*check || *migrate || *edit_config) && !path.exists() {
            warning(format!(
                "Configuration file {} not found. Run `officelog init` first.",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *migrate {
            ConfigLogic::migrate(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
