use crate::core::submission::FormSpec;
use crate::errors::AppResult;
use crate::utils::date::parse_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_display_offset")]
    pub display_offset: String,
    #[serde(default = "default_form_base_url")]
    pub form_base_url: String,
    #[serde(default = "default_form_entry_field")]
    pub form_entry_field: String,
    #[serde(default = "default_form_exit_field")]
    pub form_exit_field: String,
    #[serde(default = "default_form_company_field")]
    pub form_company_field: String,
    #[serde(default = "default_form_comment_field")]
    pub form_comment_field: String,
}

fn default_display_offset() -> String {
    "+05:30".to_string()
}
fn default_form_base_url() -> String {
    "https://docs.google.com/forms/d/e/YOUR_FORM_ID/viewform".to_string()
}
fn default_form_entry_field() -> String {
    "160031710".to_string()
}
fn default_form_exit_field() -> String {
    "1057727999".to_string()
}
fn default_form_company_field() -> String {
    "302638121".to_string()
}
fn default_form_comment_field() -> String {
    "1773816160".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            display_offset: default_display_offset(),
            form_base_url: default_form_base_url(),
            form_entry_field: default_form_entry_field(),
            form_exit_field: default_form_exit_field(),
            form_company_field: default_form_company_field(),
            form_comment_field: default_form_comment_field(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("officelog")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".officelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("officelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("officelog.sqlite")
    }

    /// Load configuration from the standard location.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Initialize configuration and database files; returns the database path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("officelog.sqlite"),
        };

        if !is_test {
            let config = Self::with_database(db_path.clone());
            config.save_to(&Self::config_file())?;
        }

        Ok(db_path)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// The fixed offset every timestamp is displayed in.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_offset(&self.display_offset)
    }

    pub fn form_spec(&self) -> FormSpec {
        FormSpec {
            base_url: self.form_base_url.clone(),
            entry_field: self.form_entry_field.clone(),
            exit_field: self.form_exit_field.clone(),
            company_field: self.form_company_field.clone(),
            comment_field: self.form_comment_field.clone(),
        }
    }
}
