use crate::client::{AuthCandidate, JiraClient};
use crate::config::{config_path, load_config, load_config_from, save_config, Config, TrackerConfig};
use crate::constants::{DEFAULT_DONE_KEYWORDS, DEFAULT_IN_PROGRESS_KEYWORDS};
use crate::error::{ReportError, ReportResult};
use crate::report::Classifier;
use std::path::Path;
use std::sync::Arc;

/// Central context for CLI operations: stored settings plus a lazily built client.
pub struct CliContext {
    config: Config,
    client: Option<Arc<JiraClient>>,
}

impl CliContext {
    /// Create a context with no stored settings
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    pub fn from_config(config: Config) -> Self {
        Self { config, client: None }
    }

    /// Load settings from the config file, then apply environment overrides
    pub fn load() -> ReportResult<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> ReportResult<Self> {
        Ok(Self::from_config(load_config_from(path)?.apply_env()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&mut self) -> ReportResult<Arc<JiraClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(JiraClient::new()?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Raw URL, email and token, empty where unset. Validation happens downstream.
    pub fn settings(&self) -> (String, String, String) {
        (
            self.config.jira_url.clone().unwrap_or_default(),
            self.config.jira_email.clone().unwrap_or_default(),
            self.config.jira_token.clone().unwrap_or_default(),
        )
    }

    /// Validated connection settings, using the scheme/version recorded by `auth` when present.
    pub fn tracker_config(&self) -> ReportResult<TrackerConfig> {
        if self.config.jira_url.is_none() && self.config.jira_token.is_none() {
            return Err(ReportError::Config(
                "No Jira settings found. Run 'jira-report auth' or set JIRA_URL, JIRA_EMAIL and JIRA_TOKEN.".to_string(),
            ));
        }

        let (url, email, token) = self.settings();
        let tracker = TrackerConfig::new(&url, &email, &token)?;

        Ok(match (self.config.auth_scheme, self.config.api_version) {
            (Some(scheme), Some(version)) => tracker.with_candidate(AuthCandidate { scheme, version }),
            _ => tracker,
        })
    }

    pub fn classifier(&self) -> Classifier {
        let owned = |keywords: &[&str]| keywords.iter().map(|k| k.to_string()).collect::<Vec<_>>();

        Classifier::new(
            self.config
                .done_keywords
                .clone()
                .unwrap_or_else(|| owned(&DEFAULT_DONE_KEYWORDS[..])),
            self.config
                .in_progress_keywords
                .clone()
                .unwrap_or_else(|| owned(&DEFAULT_IN_PROGRESS_KEYWORDS[..])),
        )
    }

    /// Store working credentials and the scheme/version that authenticated them.
    pub fn remember(&mut self, tracker: &TrackerConfig, candidate: AuthCandidate) -> ReportResult<()> {
        self.config.jira_url = Some(tracker.base_url().to_string());
        self.config.jira_email = Some(tracker.identity_email().to_string());
        self.config.jira_token = Some(tracker.secret_token().to_string());
        self.config.auth_scheme = Some(candidate.scheme);
        self.config.api_version = Some(candidate.version);
        save_config(&self.config)
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for contexts with per-invocation overrides of the stored settings
pub struct CliContextBuilder {
    config: Option<Config>,
    url: Option<String>,
    email: Option<String>,
    token: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self { config: None, url: None, email: None, token: None }
    }

    /// Start from `config` instead of reading the config file.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn build(self) -> ReportResult<CliContext> {
        let mut config = match self.config {
            Some(config) => config,
            None => load_config()?.apply_env(),
        };

        // Overridden credentials have not been through the cascade yet
        if self.url.is_some() || self.email.is_some() || self.token.is_some() {
            config.auth_scheme = None;
            config.api_version = None;
        }
        if let Some(url) = self.url {
            config.jira_url = Some(url);
        }
        if let Some(email) = self.email {
            config.jira_email = Some(email);
        }
        if let Some(token) = self.token {
            config.jira_token = Some(token);
        }

        Ok(CliContext::from_config(config))
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
