use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A material the user has activated for the current simulation.
///
/// Only `name` is used by the store; it is the lookup key for removal and is
/// not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path: None,
        }
    }

    pub fn from_file(name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file_path: Some(file_path.into()),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file_path {
            Some(path) => write!(f, "{} ({})", self.name, path.display()),
            None => write!(f, "{}", self.name),
        }
    }
}
