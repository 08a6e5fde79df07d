//! Configuration for the demo host binary.
//!
//! Loaded from `config.toml` inside the demo's app directory. Every key is
//! optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::modal::IdentifierMode;

/// Filename of the demo configuration inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for the demo host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Project the demo files feedback under.
    #[serde(default = "default_project_id")]
    pub project_id: String,
    /// Gateway endpoint; the built-in default endpoint when absent.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Identifier prefill, for example the signed-in user's e-mail.
    #[serde(default)]
    pub identifier: Option<String>,
    /// Identifier collection mode.
    #[serde(default)]
    pub identifier_mode: IdentifierMode,
    /// Placeholder for the identifier field.
    #[serde(default)]
    pub identifier_placeholder: Option<String>,
    /// Page path attached to submissions.
    #[serde(default = "default_page_path")]
    pub page_path: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            endpoint: None,
            identifier: None,
            identifier_mode: IdentifierMode::default(),
            identifier_placeholder: None,
            page_path: default_page_path(),
        }
    }
}

fn default_project_id() -> String {
    "demo".to_string()
}

fn default_page_path() -> String {
    "/demo".to_string()
}

/// Errors raised while loading the demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be prepared.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// The config file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file exists but is not valid for these settings.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load the demo configuration, defaults when the file is absent.
pub fn load_or_default() -> Result<DemoConfig, ConfigError> {
    let path = app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME);
    load_from(&path)
}

fn load_from(path: &Path) -> Result<DemoConfig, ConfigError> {
    if !path.exists() {
        return Ok(DemoConfig::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
