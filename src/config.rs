// SPDX-License-Identifier: GPL-3.0-only

//! User configuration handling

use crate::errors::{CaptureError, CaptureResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// User configuration for capture sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Root directory that new session folders are created under.
    /// `None` uses the user documents directory.
    pub capture_root: Option<PathBuf>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_root: None, // Default to the documents directory
        }
    }
}

impl CaptureConfig {
    /// Loads the configuration from a JSON file.
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load(path: &Path) -> CaptureResult<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(CaptureError::Config(err.to_string())),
        };
        serde_json::from_str(&contents).map_err(|e| CaptureError::Config(e.to_string()))
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> CaptureResult<()> {
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| CaptureError::Config(e.to_string()))?;
        std::fs::write(path, contents).map_err(|e| CaptureError::Config(e.to_string()))
    }
}
