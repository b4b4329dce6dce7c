use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::client::auth::{ApiVersion, AuthScheme};
use crate::constants::{CONFIG_FILE, ENV_JIRA_EMAIL, ENV_JIRA_TOKEN, ENV_JIRA_URL};
use crate::error::{ReportError, ReportResult};

/// Settings persisted between runs.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub jira_url: Option<String>,
    pub jira_email: Option<String>,
    pub jira_token: Option<String>,
    /// Scheme/version that last passed the connection check.
    pub auth_scheme: Option<AuthScheme>,
    pub api_version: Option<ApiVersion>,
    #[serde(default)]
    pub done_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub in_progress_keywords: Option<Vec<String>>,
}

impl Config {
    /// Environment variables take precedence over the stored file values.
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = env::var(ENV_JIRA_URL) {
            self.jira_url = Some(url);
        }
        if let Ok(email) = env::var(ENV_JIRA_EMAIL) {
            self.jira_email = Some(email);
        }
        if let Ok(token) = env::var(ENV_JIRA_TOKEN) {
            self.jira_token = Some(token);
        }
        self
    }
}

pub fn config_path() -> ReportResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ReportError::Config("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> ReportResult<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> ReportResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| ReportError::Config(format!("{} is not valid: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> ReportResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> ReportResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}
