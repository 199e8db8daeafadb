//! Runtime configuration.
//!
//! Values resolve in the order: CLI flag > environment variable > config file
//! (`$XDG_CONFIG_HOME/week_menu/config.toml` or `~/.config/week_menu/config.toml`)
//! > built-in default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

pub const DATA_DIR_ENV: &str = "WEEK_MENU_DATA_DIR";
pub const CATALOG_ENV: &str = "WEEK_MENU_CATALOG";
pub const DELAY_ENV: &str = "WEEK_MENU_DELAY_MS";

pub const DEFAULT_DATA_DIR: &str = "week_menu_data";

/// On-disk config file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub generation_delay_ms: Option<u64>,
}

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the file-backed key-value store writes into.
    pub data_dir: PathBuf,
    /// Custom catalog JSON; `None` uses the built-in dishes.
    pub catalog_path: Option<PathBuf>,
    /// Artificial pause before a generated plan is shown.
    pub generation_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            generation_delay: Duration::ZERO,
        }
    }
}

/// Return the week_menu config directory.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("week_menu");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("week_menu")
}

/// Return the default config file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Read a config file. A missing file is `Ok(None)`.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(toml::from_str(&contents)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Config {
    /// Resolve against the real environment and config file.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let path = overrides.config_file.clone().unwrap_or_else(config_path);
        let file = load_config_file(&path)?;
        if file.is_some() {
            tracing::debug!(path = %path.display(), "loaded config file");
        }
        Self::resolve_with(overrides, |key| std::env::var(key).ok(), file)
    }

    /// Resolve from explicit sources.
    pub fn resolve_with<F>(overrides: &ConfigOverrides, env: F, file: Option<ConfigFile>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let defaults = Config::default();

        let data_dir = overrides
            .data_dir
            .clone()
            .or_else(|| env(DATA_DIR_ENV).map(PathBuf::from))
            .or(file.data_dir)
            .unwrap_or(defaults.data_dir);

        let catalog_path = overrides
            .catalog
            .clone()
            .or_else(|| env(CATALOG_ENV).map(PathBuf::from))
            .or(file.catalog);

        let delay_ms = match env(DELAY_ENV) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                PlannerError::InvalidInput(format!("{} must be a whole number of ms, got '{}'", DELAY_ENV, raw))
            })?),
            None => file.generation_delay_ms,
        };

        Ok(Self {
            data_dir,
            catalog_path,
            generation_delay: delay_ms.map(Duration::from_millis).unwrap_or(defaults.generation_delay),
        })
    }
}
