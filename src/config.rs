use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::services::sync::{DEFAULT_FETCH_LIMIT, DEFAULT_SERVER_CATEGORY};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote quote source, used for both GET and POST
    pub endpoint: String,
    pub sync_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub fetch_limit: usize,
    pub server_category: String,
    /// Directory of the durable store (default: platform data dir)
    pub data_dir: Option<PathBuf>,
    /// Default path offered by the import/export prompt
    pub export_path: String,
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://jsonplaceholder.typicode.com/posts".to_string(),
            sync_interval_secs: 60,
            request_timeout_secs: 10,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            server_category: DEFAULT_SERVER_CATEGORY.to_string(),
            data_dir: None,
            export_path: "quotes.json".to_string(),
            vim_mode: false,
        }
    }
}

impl Config {
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("Failed to parse config")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&source)
    }

    /// Load from the first config file found, or use defaults if there is none
    pub fn load(cli_path: Option<&str>) -> Result<(Self, Option<PathBuf>)> {
        match find_config_path(cli_path)? {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// 1. `--config <path>` (must exist)
/// 2. `<config_dir>/quotetui/config.yaml`
/// 3. `./config.yaml`
fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("quotetui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
