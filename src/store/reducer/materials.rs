use super::super::action::MaterialsAction;
use super::super::command::Command;
use crate::domain::Material;

pub fn reduce(materials: &mut Vec<Material>, action: MaterialsAction) -> Vec<Command> {
    match action {
        // Hands the filepath back without touching the list.
        MaterialsAction::Add { filepath } => vec![Command::MaterialRequested { filepath }],
        MaterialsAction::Delete { label } => {
            match materials.iter().position(|m| m.name == label) {
                Some(index) => {
                    let removed = materials.remove(index);
                    log::debug!("deleteMaterial: removed {removed}");
                }
                None => log::debug!("deleteMaterial: no activated material named {label}"),
            }
            Vec::new()
        }
    }
}
