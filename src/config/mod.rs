//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The only preference today is the display language. The file lives under
//! the platform configuration directory (`dirs::config_dir()`), and a custom
//! directory can be supplied for tests or portable installs.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "FleetDesk";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preferred display language in BCP-47 form (e.g. `en`, `ar`).
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Returns the settings file path inside `dir`.
pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
