use reqwest::StatusCode;

use crate::client::AUTH_CASCADE;
use crate::error::{CascadeFailure, ReportError};

#[test]
fn test_auth_error_carries_status_and_body() {
    let error = ReportError::Auth {
        status: StatusCode::UNAUTHORIZED,
        body: "{\"errorMessages\":[\"Login required\"]}".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "HTTP 401 Unauthorized - Body: {\"errorMessages\":[\"Login required\"]}"
    );

    let error = ReportError::Query {
        status: StatusCode::BAD_REQUEST,
        body: String::new(),
    };
    assert_eq!(error.to_string(), "Jira API error: 400 Bad Request");
}

#[test]
fn test_cascade_exhausted_lists_every_attempt() {
    let failures = AUTH_CASCADE
        .iter()
        .enumerate()
        .map(|(i, candidate)| CascadeFailure {
            candidate: *candidate,
            message: format!("failure {}", i),
        })
        .collect();

    let text = ReportError::CascadeExhausted(failures).to_string();
    assert_eq!(
        text,
        "All authentication methods failed:\n\n\
         Bearer Token (v3): failure 0\n\n\
         Basic Auth (v3): failure 1\n\n\
         Bearer Token (v2): failure 2"
    );
}
