//! Bring an older configuration file up to the current set of keys.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a key/value document",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default configuration is not a mapping".into())),
    }
}

/// Keys present in the current configuration layout but absent from `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values are kept.
/// Returns the keys that were added; the file is only rewritten when needed.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
