use std::path::Path;

use super::command::Command;
use crate::infra::app_config;
use crate::state::GuiRuntimeState;

pub fn run(state: &mut GuiRuntimeState, config_path: &Path, command: &Command) {
    match command {
        Command::MaterialRequested { filepath } => {
            log::debug!("addMaterial returned {filepath}; activated materials unchanged");
        }
        Command::SavePreferences { config } => save_preferences(config_path, config),
        Command::LoadPreferences => load_preferences(state, config_path),
    }
}

fn save_preferences(path: &Path, config: &app_config::GuiConfig) {
    if let Err(err) = app_config::save_config_to(path, config) {
        log::warn!("Failed to save preferences to {}: {}", path.display(), err);
    }
}

fn load_preferences(state: &mut GuiRuntimeState, path: &Path) {
    let config = app_config::load_config_from(path);
    state.apply_config(&config);
}
