//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
pub mod named;
mod reducer;
mod runtime;

pub use action::{Action, MaterialsAction, PreferencesAction, UiAction, UnitsAction};
pub use command::Command;

use std::path::{Path, PathBuf};

use crate::domain::DispatchError;
use crate::infra::app_config;
use crate::state::GuiRuntimeState;

type Observer = Box<dyn FnMut(&GuiRuntimeState)>;

/// Owns the runtime state and is the only place it is mutated.
pub struct Store {
    state: GuiRuntimeState,
    config_path: PathBuf,
    observers: Vec<Observer>,
    skip_runtime: bool,
}

impl Store {
    /// Store whose preferences live at the default config path.
    pub fn new(state: GuiRuntimeState) -> Self {
        Self::with_config_path(state, app_config::config_path())
    }

    /// Store whose preference commands read and write `config_path`.
    pub fn with_config_path(state: GuiRuntimeState, config_path: impl Into<PathBuf>) -> Self {
        Self {
            state,
            config_path: config_path.into(),
            observers: Vec::new(),
            skip_runtime: false,
        }
    }

    /// Store whose commands are returned but never executed.
    pub fn without_runtime(state: GuiRuntimeState) -> Self {
        Self {
            skip_runtime: true,
            ..Self::new(state)
        }
    }

    pub fn state(&self) -> &GuiRuntimeState {
        &self.state
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn into_state(self) -> GuiRuntimeState {
        self.state
    }

    /// Registers a callback run after every dispatch with the updated state.
    pub fn subscribe(&mut self, observer: impl FnMut(&GuiRuntimeState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Command> {
        log::debug!("dispatch {}: {:?}", action.mutation_name(), action);
        let commands = reducer::reduce(&mut self.state, action);
        if !self.skip_runtime {
            for command in &commands {
                runtime::run(&mut self.state, &self.config_path, command);
            }
        }
        for observer in &mut self.observers {
            observer(&self.state);
        }
        commands
    }

    pub fn dispatch_named(
        &mut self,
        name: &str,
        payload: serde_json::Value,
    ) -> Result<Vec<Command>, DispatchError> {
        let action = named::parse_action(name, payload)?;
        Ok(self.dispatch(action))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(GuiRuntimeState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("config_path", &self.config_path)
            .field("observers", &self.observers.len())
            .field("skip_runtime", &self.skip_runtime)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Material;
    use crate::infra::app_config::{GuiConfig, load_config_from, save_config_to};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[test]
    fn observers_see_state_after_each_dispatch() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::without_runtime(GuiRuntimeState::default());
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.units.clone()));

        store.dispatch(Action::Units(UnitsAction::SetUnits("mkm".into())));
        store.dispatch(Action::Units(UnitsAction::SetUnits("mm".into())));

        assert_eq!(*seen.borrow(), ["mkm", "mm"]);
    }

    #[test]
    fn observers_run_even_when_nothing_changes() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::without_runtime(GuiRuntimeState::default());
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(Action::Materials(MaterialsAction::Delete {
            label: "missing".into(),
        }));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn dispatch_named_applies_mutation() {
        let mut store = Store::without_runtime(
            GuiRuntimeState::default().with_materials([Material::new("Ag")]),
        );

        store
            .dispatch_named("setIsSourceSameUnits", json!(false))
            .unwrap();
        store.dispatch_named("deleteMaterial", json!("Ag")).unwrap();

        assert!(!store.state().is_source_same_units);
        assert!(store.state().activated_materials.is_empty());
    }

    #[test]
    fn rejected_dispatch_leaves_state_and_observers_untouched() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::without_runtime(GuiRuntimeState::default());
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let err = store.dispatch_named("setUnits", json!(true)).unwrap_err();

        assert!(matches!(err, DispatchError::InvalidPayload { .. }));
        assert_eq!(store.state(), &GuiRuntimeState::default());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn add_material_value_is_returned_to_caller() {
        let mut store = Store::without_runtime(GuiRuntimeState::default());

        let commands = store.dispatch_named("addMaterial", json!("Au.csv")).unwrap();

        assert_eq!(
            commands,
            vec![Command::MaterialRequested {
                filepath: "Au.csv".into()
            }]
        );
        assert!(store.state().activated_materials.is_empty());
    }

    #[test]
    fn reload_preferences_reads_the_store_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let saved = GuiConfig {
            units: "cm".into(),
            source_units: "mkm".into(),
            is_source_same_units: false,
            show_help_for_input_with_units: false,
        };
        save_config_to(&path, &saved).unwrap();
        let materials = vec![Material::new("Ag"), Material::from_file("Si", "Si.csv")];
        let mut store = Store::with_config_path(
            GuiRuntimeState::default().with_materials(materials.clone()),
            &path,
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.units.clone()));

        let commands = store.dispatch_named("reloadPreferences", json!(null)).unwrap();

        assert_eq!(commands, vec![Command::LoadPreferences]);
        assert_eq!(store.state().preferences(), saved);
        assert_eq!(store.state().activated_materials, materials);
        assert_eq!(*seen.borrow(), ["cm"]);
    }

    #[test]
    fn save_preferences_writes_the_store_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs").join("mine.toml");
        let mut store = Store::with_config_path(GuiRuntimeState::default(), &path);

        store.dispatch(Action::Units(UnitsAction::SetUnits("mm".into())));
        store.dispatch(Action::Preferences(PreferencesAction::Save));

        assert_eq!(store.config_path(), path.as_path());
        assert_eq!(load_config_from(&path).units, "mm");
    }

    #[test]
    fn without_runtime_skips_preference_io() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut store = Store {
            config_path: path.clone(),
            ..Store::without_runtime(GuiRuntimeState::default())
        };

        store.dispatch(Action::Preferences(PreferencesAction::Save));

        assert!(!path.exists());
    }
}
