use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::job::{JobConfig, SourceKind};

pub mod job;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_pretty() -> bool {
    env_flag("YOMU_PRETTY", false)
}

fn default_parallel() -> bool {
    env_flag("YOMU_PARALLEL", true)
}

fn env_flag(name: &str, default: bool) -> bool {
    parse_flag(env::var(name).ok().as_deref(), default)
}

/// `true`/`false` only; anything else keeps the default
fn parse_flag(value: Option<&str>, default: bool) -> bool {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Indent the written database
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Extract entries on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

impl Config {
    /// Defaults from the environment, no jobs
    pub fn new() -> Self {
        Self {
            pretty: default_pretty(),
            parallel: default_parallel(),
            jobs: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
