#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Ui(UiAction),
    Units(UnitsAction),
    Materials(MaterialsAction),
    Preferences(PreferencesAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SetIsShowingHelpForInputWithUnits(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitsAction {
    SetUnits(String),
    SetSourceUnits(String),
    SetIsSourceSameUnits(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialsAction {
    /// Does not activate anything; see `reducer::materials`.
    Add { filepath: String },
    Delete { label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesAction {
    Save,
    Reload,
}

impl Action {
    /// The external name this action is dispatched under.
    pub fn mutation_name(&self) -> &'static str {
        match self {
            Action::Ui(UiAction::SetIsShowingHelpForInputWithUnits(_)) => {
                "setIsShowingHelpForInputWithUnits"
            }
            Action::Units(UnitsAction::SetUnits(_)) => "setUnits",
            Action::Units(UnitsAction::SetSourceUnits(_)) => "setSourceUnits",
            Action::Units(UnitsAction::SetIsSourceSameUnits(_)) => "setIsSourceSameUnits",
            Action::Materials(MaterialsAction::Add { .. }) => "addMaterial",
            Action::Materials(MaterialsAction::Delete { .. }) => "deleteMaterial",
            Action::Preferences(PreferencesAction::Save) => "savePreferences",
            Action::Preferences(PreferencesAction::Reload) => "reloadPreferences",
        }
    }
}
