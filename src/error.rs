use reqwest::StatusCode;
use thiserror::Error;

use crate::client::auth::{redact_secret, AuthCandidate};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{0}")]
    Validation(String),

    #[error("HTTP {status}{}", body_suffix(.body))]
    Auth { status: StatusCode, body: String },

    #[error("Jira API error: {status}{}", body_suffix(.body))]
    Query { status: StatusCode, body: String },

    #[error("All authentication methods failed:{}", format_failures(.0))]
    CascadeExhausted(Vec<CascadeFailure>),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ReportResult<T> = Result<T, ReportError>;

impl ReportError {
    /// Display text with the credentials for `email`/`secret` masked.
    pub fn redacted(&self, email: &str, secret: &str) -> String {
        redact_secret(&self.to_string(), email, secret)
    }
}

/// One failed step of the authentication cascade.
#[derive(Debug, Clone)]
pub struct CascadeFailure {
    pub candidate: AuthCandidate,
    pub message: String,
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" - Body: {}", body)
    }
}

fn format_failures(failures: &[CascadeFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("\n\n{}: {}", f.candidate.label(), f.message))
        .collect()
}
