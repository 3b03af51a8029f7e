use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ParameterConvention;

/// Config file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "snowscape-runner.toml";

/// Per-project runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RunnerConfig {
    /// Command template used to launch the preview binary. Rewritten
    /// with `-p <package>` when the project is a workspace.
    pub base_command: String,
    /// How the function name is handed to the launched process.
    pub parameter_convention: ParameterConvention,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_command: "cargo run --bin preview".to_string(),
            parameter_convention: ParameterConvention::default(),
        }
    }
}

impl RunnerConfig {
    /// Load the configuration stored at the project root. A missing
    /// file yields the defaults; an unreadable or malformed file is a
    /// configuration error.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!("No {} at {:?}, using defaults", CONFIG_FILE_NAME, project_root);
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
    }
}
