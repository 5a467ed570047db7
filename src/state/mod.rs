use serde::{Deserialize, Serialize};

use crate::domain::Material;
use crate::infra::app_config::GuiConfig;

pub const DEFAULT_UNITS: &str = "nm";

/// Runtime state of the GUI, mutated only through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiRuntimeState {
    pub is_showing_help_for_input_with_units: bool,
    pub units: String,
    /// Units of the source (incident wave) parameters.
    pub source_units: String,
    pub is_source_same_units: bool,
    /// Display order follows insertion order.
    pub activated_materials: Vec<Material>,
}

impl Default for GuiRuntimeState {
    fn default() -> Self {
        Self {
            is_showing_help_for_input_with_units: true,
            units: DEFAULT_UNITS.to_string(),
            source_units: DEFAULT_UNITS.to_string(),
            is_source_same_units: true,
            activated_materials: Vec::new(),
        }
    }
}

impl GuiRuntimeState {
    pub fn from_config(config: &GuiConfig) -> Self {
        let mut state = Self::default();
        state.apply_config(config);
        state
    }

    /// Overwrites the preference fields. Activated materials are kept.
    pub fn apply_config(&mut self, config: &GuiConfig) {
        self.units = config.units.clone();
        self.source_units = config.source_units.clone();
        self.is_source_same_units = config.is_source_same_units;
        self.is_showing_help_for_input_with_units = config.show_help_for_input_with_units;
    }

    pub fn preferences(&self) -> GuiConfig {
        GuiConfig {
            units: self.units.clone(),
            source_units: self.source_units.clone(),
            is_source_same_units: self.is_source_same_units,
            show_help_for_input_with_units: self.is_showing_help_for_input_with_units,
        }
    }

    pub fn with_materials(mut self, materials: impl IntoIterator<Item = Material>) -> Self {
        self.activated_materials.extend(materials);
        self
    }
}
