//! scattnlay GUI runtime store CLI.
//!
//! Builds the runtime state from saved preferences, applies a script of named
//! mutations and prints the resulting state as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use scattnlay_gui::domain::Material;
use scattnlay_gui::infra::app_config::{self, GuiConfig};
use scattnlay_gui::state::GuiRuntimeState;
use scattnlay_gui::store::{Command, Store};

#[derive(Parser, Debug)]
#[command(name = "scattnlay-gui")]
#[command(version)]
#[command(about = "Drive the scattnlay GUI runtime store from the terminal", long_about = None)]
struct Args {
    /// Preferences file (defaults to the platform data directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Material to activate before running the command (repeatable)
    #[arg(short, long = "material")]
    materials: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the initial state
    Show,

    /// Apply a JSON script of named mutations and print the final state
    Apply {
        /// File holding `[{"mutation": "...", "payload": ...}, ...]`
        script: PathBuf,
    },

    /// Persist the initial state's unit and help preferences
    SavePreferences,
}

#[derive(Debug, Deserialize)]
struct ScriptStep {
    mutation: String,
    #[serde(default)]
    payload: serde_json::Value,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(app_config::config_path);
    let config = app_config::load_config_from(&config_path);
    let state = GuiRuntimeState::from_config(&config)
        .with_materials(args.materials.into_iter().map(Material::new));

    match args.command {
        Commands::Show => print_state(&state),
        Commands::Apply { script } => {
            let state = apply_script(Store::with_config_path(state, &config_path), &script)?;
            print_state(&state)
        }
        Commands::SavePreferences => save_preferences(&config_path, &state.preferences()),
    }
}

fn apply_script(mut store: Store, script: &Path) -> Result<GuiRuntimeState> {
    let contents = std::fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse script {}", script.display()))?;

    for (index, step) in steps.into_iter().enumerate() {
        let commands = store
            .dispatch_named(&step.mutation, step.payload)
            .with_context(|| format!("Step {} ({}) rejected", index + 1, step.mutation))?;
        for command in commands {
            if let Command::MaterialRequested { filepath } = command {
                log::info!("addMaterial({filepath}) did not activate a material");
            }
        }
    }

    Ok(store.into_state())
}

fn save_preferences(path: &Path, config: &GuiConfig) -> Result<()> {
    app_config::save_config_to(path, config)
        .with_context(|| format!("Failed to save preferences to {}", path.display()))?;
    println!("Saved preferences to {}", path.display());
    Ok(())
}

fn print_state(state: &GuiRuntimeState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    println!("{json}");
    Ok(())
}
