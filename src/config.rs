//! Editor configuration (chili.yaml).
//!
//! The config sets where session state is stored and where exports are
//! written. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomError};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "chili.yaml";

/// Configuration loaded from chili.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory backing the session store, one file per key.
    pub storage: PathBuf,

    /// Output directory for exports.
    pub output: PathBuf,

    /// File name for the generated C header.
    pub header_file: String,

    /// File name for the exported project document.
    pub project_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: PathBuf::from(".chili"),
            output: PathBuf::from("dist"),
            header_file: "roomMap.h".to_string(),
            project_file: "room_project.json".to_string(),
        }
    }
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RoomError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `explicit` if given, else chili.yaml in `dir` if present, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| RoomError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| RoomError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    pub fn header_path(&self) -> PathBuf {
        self.output.join(&self.header_file)
    }

    pub fn project_path(&self) -> PathBuf {
        self.output.join(&self.project_file)
    }
}
