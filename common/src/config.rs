//! # Active Project Record
//!
//! The persisted choice of which project file holds the vertical slices,
//! stored as a pretty-printed JSON object under a fixed file name in the
//! workspace root.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the active-project record inside the workspace root.
pub const CONFIG_FILE_NAME: &str = ".slicemap.json";

/// The active-project configuration record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveProject {
    /// Path to the project file, relative to the workspace root.
    pub project_file: String,
}

impl ActiveProject {
    /// Loads the record from `root`, or `None` when no record exists yet.
    pub fn load(root: &Path) -> Result<Option<Self>, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Writes `project_file` as the active project for `root`.
    pub fn store(root: &Path, project_file: &str) -> Result<(), ConfigError> {
        let record = Self {
            project_file: project_file.to_string(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(root.join(CONFIG_FILE_NAME), json)?;
        Ok(())
    }
}
