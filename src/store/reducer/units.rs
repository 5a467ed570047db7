use super::super::action::UnitsAction;
use super::super::command::Command;
use crate::state::GuiRuntimeState;

pub fn reduce(state: &mut GuiRuntimeState, action: UnitsAction) -> Vec<Command> {
    match action {
        UnitsAction::SetUnits(val) => {
            state.units = val;
            Vec::new()
        }
        UnitsAction::SetSourceUnits(val) => {
            state.source_units = val;
            Vec::new()
        }
        UnitsAction::SetIsSourceSameUnits(val) => {
            state.is_source_same_units = val;
            Vec::new()
        }
    }
}
