//! Resolves externally named mutations into typed actions.

use serde_json::Value;

use super::action::{Action, MaterialsAction, PreferencesAction, UiAction, UnitsAction};
use crate::domain::DispatchError;

pub fn parse_action(name: &str, payload: Value) -> Result<Action, DispatchError> {
    let action = match name {
        "setIsShowingHelpForInputWithUnits" => Action::Ui(
            UiAction::SetIsShowingHelpForInputWithUnits(bool_payload(name, &payload)?),
        ),
        "setUnits" => Action::Units(UnitsAction::SetUnits(string_payload(name, payload)?)),
        "setSourceUnits" => {
            Action::Units(UnitsAction::SetSourceUnits(string_payload(name, payload)?))
        }
        "setIsSourceSameUnits" => Action::Units(UnitsAction::SetIsSourceSameUnits(
            bool_payload(name, &payload)?,
        )),
        "addMaterial" => Action::Materials(MaterialsAction::Add {
            filepath: string_payload(name, payload)?,
        }),
        "deleteMaterial" => Action::Materials(MaterialsAction::Delete {
            label: string_payload(name, payload)?,
        }),
        "savePreferences" => Action::Preferences(PreferencesAction::Save),
        "reloadPreferences" => Action::Preferences(PreferencesAction::Reload),
        _ => return Err(DispatchError::UnknownMutation(name.to_string())),
    };
    Ok(action)
}

fn bool_payload(name: &str, payload: &Value) -> Result<bool, DispatchError> {
    payload.as_bool().ok_or_else(|| DispatchError::InvalidPayload {
        mutation: name.to_string(),
        expected: "boolean",
    })
}

fn string_payload(name: &str, payload: Value) -> Result<String, DispatchError> {
    match payload {
        Value::String(s) => Ok(s),
        _ => Err(DispatchError::InvalidPayload {
            mutation: name.to_string(),
            expected: "string",
        }),
    }
}
