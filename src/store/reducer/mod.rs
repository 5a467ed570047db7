pub mod materials;
pub mod preferences;
pub mod ui;
pub mod units;

use super::action::Action;
use super::command::Command;
use crate::state::GuiRuntimeState;

pub fn reduce(state: &mut GuiRuntimeState, action: Action) -> Vec<Command> {
    match action {
        Action::Ui(action) => ui::reduce(state, action),
        Action::Units(action) => units::reduce(state, action),
        Action::Materials(action) => materials::reduce(&mut state.activated_materials, action),
        Action::Preferences(action) => preferences::reduce(state, action),
    }
}
