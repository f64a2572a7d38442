use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;

const APP_DIR: &str = "iep-inbox";
const CONFIG_FILENAME: &str = "config.json";

/// Labels shown inline on a conversation row before collapsing into "+N".
pub const DEFAULT_LABEL_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboxConfig {
    pub log_dir: PathBuf,
    pub label_preview_limit: usize,
    /// Strip surrounding whitespace from the search term before matching.
    pub trim_search_term: bool,
}

impl Default for InboxConfig {
    fn default() -> Self {
        InboxConfig {
            log_dir: default_log_dir(),
            label_preview_limit: DEFAULT_LABEL_PREVIEW_LIMIT,
            trim_search_term: true,
        }
    }
}

impl InboxConfig {
    /// Load config from a JSON file. A missing file yields the defaults;
    /// a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(InboxConfig::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }
}

pub fn default_log_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push("logs");
    path
}

pub fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(CONFIG_FILENAME);
    path
}
