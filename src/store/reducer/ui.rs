use super::super::action::UiAction;
use super::super::command::Command;
use crate::state::GuiRuntimeState;

pub fn reduce(state: &mut GuiRuntimeState, action: UiAction) -> Vec<Command> {
    match action {
        UiAction::SetIsShowingHelpForInputWithUnits(val) => {
            state.is_showing_help_for_input_with_units = val;
            Vec::new()
        }
    }
}
