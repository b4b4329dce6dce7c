use chrono::{Days, Local, NaiveDate};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};

use super::auth::{authorization_header, mask_secret, redact_secret, AuthCandidate, AUTH_CASCADE};
use crate::config::TrackerConfig;
use crate::constants::{MAX_RESULTS, MYSELF_PATH, SEARCH_EXPAND, SEARCH_FIELDS, SEARCH_PATH};
use crate::error::{CascadeFailure, ReportError, ReportResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::{Identity, Issue, SearchRequest, SearchResponse};

/// Stateless Jira REST client. Credentials travel with each call in a [`TrackerConfig`].
pub struct JiraClient {
    client: reqwest::Client,
}

enum CascadeState {
    Trying(usize),
    Success(AuthCandidate, Identity),
    Exhausted,
}

impl JiraClient {
    pub fn new() -> ReportResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    fn request(&self, method: Method, config: &TrackerConfig, path: &str) -> RequestBuilder {
        let url = config.endpoint(path);
        log_debug(&format!(
            "{} {} ({} auth, email {}, token {})",
            method,
            url,
            config.candidate(),
            config.identity_email(),
            mask_secret(config.secret_token())
        ));

        self.client
            .request(method, url)
            .header(AUTHORIZATION, authorization_header(config))
    }

    async fn failure_body(config: &TrackerConfig, response: Response) -> String {
        let body = response.text().await.unwrap_or_default();
        log_error(&format!(
            "Jira responded with an error body: {}",
            redact_secret(&body, config.identity_email(), config.secret_token())
        ));
        body
    }

    /// Look up the account behind `config`'s credentials.
    pub async fn resolve_identity(&self, config: &TrackerConfig) -> ReportResult<Identity> {
        let response = self.request(Method::GET, config, MYSELF_PATH).send().await?;
        let status = response.status();
        log_debug(&format!("Identity lookup returned {}", status));

        if !status.is_success() {
            let body = Self::failure_body(config, response).await;
            return Err(ReportError::Auth { status, body });
        }

        Ok(response.json::<Identity>().await?)
    }

    /// Run a JQL search. Returns at most one page of [`MAX_RESULTS`] issues.
    pub async fn search_issues(&self, config: &TrackerConfig, jql: &str) -> ReportResult<Vec<Issue>> {
        let body = SearchRequest {
            jql,
            expand: &SEARCH_EXPAND,
            fields: &SEARCH_FIELDS,
            max_results: MAX_RESULTS,
        };

        let response = self
            .request(Method::POST, config, SEARCH_PATH)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        log_debug(&format!("Search returned {}", status));

        if !status.is_success() {
            let body = Self::failure_body(config, response).await;
            return Err(ReportError::Query { status, body });
        }

        let data: SearchResponse = response.json().await?;
        data.issues.into_iter().map(Issue::try_from).collect()
    }

    /// Issues the identity behind `config` touched in the last `days_back` days,
    /// together with that identity. Performs exactly one identity lookup.
    pub async fn fetch_recent_activity(
        &self,
        config: &TrackerConfig,
        days_back: u32,
    ) -> ReportResult<(Identity, Vec<Issue>)> {
        self.fetch_recent_activity_on(config, days_back, Local::now().date_naive())
            .await
    }

    /// Like [`fetch_recent_activity`](Self::fetch_recent_activity) with the window ending on `today`.
    pub async fn fetch_recent_activity_on(
        &self,
        config: &TrackerConfig,
        days_back: u32,
        today: NaiveDate,
    ) -> ReportResult<(Identity, Vec<Issue>)> {
        let mut identity = self.resolve_identity(config).await?;
        if identity.email_address.is_empty() {
            identity.email_address = config.identity_email().to_string();
        }

        let jql = build_recent_activity_query_on(&identity.email_address, days_back, today);
        log_info(&format!("Searching with JQL: {}", jql));

        let issues = self.search_issues(config, &jql).await?;
        log_info(&format!("Fetched {} issues", issues.len()));

        Ok((identity, issues))
    }

    pub async fn get_recent_activity(&self, config: &TrackerConfig, days_back: u32) -> ReportResult<Vec<Issue>> {
        let (_, issues) = self.fetch_recent_activity(config, days_back).await?;
        Ok(issues)
    }

    /// Try each [`AUTH_CASCADE`] candidate in order until one resolves an identity.
    ///
    /// Every candidate is attempted at most once. When all fail the error carries
    /// each attempt's message, labelled by scheme and API version.
    pub async fn authenticate_with_cascade(
        &self,
        config: &TrackerConfig,
    ) -> ReportResult<(Identity, AuthCandidate)> {
        let mut failures = Vec::new();
        let mut state = CascadeState::Trying(0);

        loop {
            state = match state {
                CascadeState::Trying(index) => match AUTH_CASCADE.get(index) {
                    Some(&candidate) => {
                        log_info(&format!("Trying {}", candidate.label()));
                        match self.resolve_identity(&config.with_candidate(candidate)).await {
                            Ok(identity) => CascadeState::Success(candidate, identity),
                            Err(e) => {
                                let message = e.to_string();
                                log_error(&format!(
                                    "{} failed: {}",
                                    candidate.label(),
                                    redact_secret(&message, config.identity_email(), config.secret_token())
                                ));
                                failures.push(CascadeFailure { candidate, message });
                                CascadeState::Trying(index + 1)
                            }
                        }
                    }
                    None => CascadeState::Exhausted,
                },
                CascadeState::Success(candidate, identity) => {
                    log_info(&format!("Authenticated with {}", candidate.label()));
                    return Ok((identity, candidate));
                }
                CascadeState::Exhausted => return Err(ReportError::CascadeExhausted(failures)),
            };
        }
    }
}

pub fn build_recent_activity_query(identity_email: &str, days_back: u32) -> String {
    build_recent_activity_query_on(identity_email, days_back, Local::now().date_naive())
}

/// JQL for issues assigned to, or worked on by, `identity_email` since `today - days_back`.
pub fn build_recent_activity_query_on(identity_email: &str, days_back: u32, today: NaiveDate) -> String {
    let start = today
        .checked_sub_days(Days::new(u64::from(days_back)))
        .unwrap_or(NaiveDate::MIN);

    format!(
        r#"(assignee = "{email}" OR worklogAuthor = "{email}") AND updated >= "{start}" ORDER BY updated DESC"#,
        email = escape_jql_string(identity_email),
        start = start.format("%Y-%m-%d")
    )
}

/// Escape `value` for use inside a double-quoted JQL string.
fn escape_jql_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
