use std::fmt;

use chrono::{Local, NaiveDate};

use super::classifier::Classifier;
use super::data::prepare_report_on;
use crate::client::{AuthCandidate, JiraClient};
use crate::config::TrackerConfig;
use crate::error::ReportResult;
use crate::formatting::connection::{render_connection_failure, render_connection_success};
use crate::formatting::{render, ReportFormat};
use crate::logging::log_info;
use crate::models::Identity;

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// Nothing was touched in the window. A valid result, not a failure.
    Empty { days_back: u32 },
    Document(String),
}

impl fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportOutcome::Empty { days_back } => write!(
                f,
                "이슈가 없습니다: 지난 {}일간 관련 이슈를 찾을 수 없습니다.",
                days_back
            ),
            ReportOutcome::Document(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionReport {
    pub identity: Identity,
    pub scheme_used: AuthCandidate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub message: String,
}

/// Fetch recent activity once and render it, or report that there was none.
pub async fn generate_weekly_report(
    client: &JiraClient,
    config: &TrackerConfig,
    days_back: u32,
    format: ReportFormat,
    classifier: &Classifier,
) -> ReportResult<ReportOutcome> {
    let today = Local::now().date_naive();
    generate_weekly_report_on(client, config, days_back, format, classifier, today).await
}

/// Like [`generate_weekly_report`] for the window ending on `today`. The search
/// and the period label share that date.
pub async fn generate_weekly_report_on(
    client: &JiraClient,
    config: &TrackerConfig,
    days_back: u32,
    format: ReportFormat,
    classifier: &Classifier,
    today: NaiveDate,
) -> ReportResult<ReportOutcome> {
    let (identity, issues) = client.fetch_recent_activity_on(config, days_back, today).await?;

    if issues.is_empty() {
        log_info(&format!("No issues in the last {} days", days_back));
        return Ok(ReportOutcome::Empty { days_back });
    }

    let report = prepare_report_on(issues, &identity.email_address, days_back, classifier, today);
    Ok(ReportOutcome::Document(render(&report, format)))
}

pub async fn verify_connection(client: &JiraClient, config: &TrackerConfig) -> ReportResult<ConnectionReport> {
    let (identity, scheme_used) = client.authenticate_with_cascade(config).await?;
    Ok(ConnectionReport { identity, scheme_used })
}

/// Validate raw settings, run the cascade, and describe the result for the operator.
pub async fn test_connection(client: &JiraClient, url: &str, email: &str, token: &str) -> ConnectionStatus {
    let result = match TrackerConfig::new(url, email, token) {
        Ok(config) => verify_connection(client, &config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => ConnectionStatus {
            connected: true,
            message: render_connection_success(&report, url.trim()),
        },
        Err(e) => {
            let error_text = e.redacted(email.trim(), token.trim());
            ConnectionStatus {
                connected: false,
                message: render_connection_failure(&error_text, url.trim(), email.trim(), token.trim()),
            }
        }
    }
}
