use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::state::GuiRuntimeState;

/// Unit and help preferences restored into the runtime state at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuiConfig {
    pub units: String,
    pub source_units: String,
    pub is_source_same_units: bool,
    pub show_help_for_input_with_units: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        GuiRuntimeState::default().preferences()
    }
}

pub fn load_config() -> GuiConfig {
    load_config_from(&config_path())
}

/// Missing or unreadable files fall back to defaults.
pub fn load_config_from(path: &Path) -> GuiConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return GuiConfig::default();
    };
    toml::from_str(&contents).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed config {}: {}", path.display(), err);
        GuiConfig::default()
    })
}

pub fn save_config(config: &GuiConfig) -> std::io::Result<()> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &GuiConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    std::fs::write(path, contents)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SCATTNLAY_GUI_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SCATTNLAY_GUI_DATA_HOME") {
        return PathBuf::from(path);
    }

    match dirs::data_dir() {
        Some(dir) => dir.join("scattnlay"),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".scattnlay"),
    }
}
