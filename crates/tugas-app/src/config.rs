//! Settings loaded from the user config file.
//!
//! Settings live in `<config_dir>/tugas/config.toml`. A missing or
//! unparsable file falls back to defaults with a warning; the app never
//! refuses to start over configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tugas_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "tugas";

/// User-facing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub ui: UiSettings,
}

/// Where the durable files live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the data directory holding `todos.json` and `tasks.json`.
    /// Empty = platform default (`~/.local/share/tugas`).
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Show the key-hint bar at the bottom of the screen.
    pub show_help_bar: bool,
    /// chrono format string for deadlines in the task table.
    pub date_format: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_help_bar: true,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Settings {
    /// Resolve the effective data directory.
    pub fn data_dir(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        }
    }
}

/// Path of the user config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from the user config file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    load_settings_from(&config_path())
}

/// Load settings from an explicit path (tests).
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists yet.
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {e}")))?;
    }

    let default_content = r#"# tugas configuration

[storage]
# Directory holding todos.json and tasks.json.
# Leave unset for the platform default (~/.local/share/tugas).
# data_dir = "/path/to/data"

[ui]
show_help_bar = true     # Key-hint bar at the bottom of the screen
date_format = "%Y-%m-%d" # chrono format for deadlines in the task table
"#;
    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {e}")))?;
    info!("Wrote default config to {:?}", path);
    Ok(())
}
