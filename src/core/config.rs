use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to `$EDITOR`/`$VISUAL`
    /// and then to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            ))),
        }
    }

    pub fn check(path: &Path) -> AppResult<()> {
        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is up to date.");
        } else {
            warning(format!(
                "Configuration file is missing: {}. Run `config --migrate`.",
                missing.join(", ")
            ));
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        let added = migrate::migrate_file(path)?;
        if added.is_empty() {
            info("Nothing to migrate.");
        } else {
            success(format!("Added to configuration: {}", added.join(", ")));
        }
        Ok(())
    }
}
