use crate::infra::app_config::GuiConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Value handed back by `addMaterial`. The material is not activated.
    MaterialRequested { filepath: String },
    SavePreferences { config: GuiConfig },
    LoadPreferences,
}
