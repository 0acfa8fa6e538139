use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use catalog_engine::{AssistantSettings, DEFAULT_DATA_FILE};
use catalog_logging::catalog_info;
use serde::{Deserialize, Serialize};

use crate::logging::LogDestination;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "site_catalog.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_destination: LogDestination,
    pub assistant: Option<AssistantConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_destination: LogDestination::default(),
            assistant: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the api key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_key_env() -> String {
    "SITE_CATALOG_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl AssistantConfig {
    pub fn settings(&self, api_key: Option<String>) -> AssistantSettings {
        AssistantSettings {
            api_key,
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..AssistantSettings::new(self.endpoint.clone(), self.model.clone())
        }
    }
}

/// Loads `explicit`, or the default file if it exists, or built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => load_from(path, true),
        None => load_from(Path::new(DEFAULT_CONFIG_FILE), false),
    }
}

fn load_from(path: &Path, required: bool) -> Result<AppConfig> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };
    let config = parse(&text).with_context(|| format!("invalid config {}", path.display()))?;
    catalog_info!("Loaded config from {:?}", path);
    Ok(config)
}

pub fn parse(text: &str) -> Result<AppConfig> {
    Ok(ron::from_str(text)?)
}
