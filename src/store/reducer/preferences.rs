use super::super::action::PreferencesAction;
use super::super::command::Command;
use crate::state::GuiRuntimeState;

pub fn reduce(state: &mut GuiRuntimeState, action: PreferencesAction) -> Vec<Command> {
    match action {
        PreferencesAction::Save => vec![Command::SavePreferences {
            config: state.preferences(),
        }],
        PreferencesAction::Reload => vec![Command::LoadPreferences],
    }
}
