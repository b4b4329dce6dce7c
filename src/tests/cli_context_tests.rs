use crate::cli_context::{CliContext, CliContextBuilder};
use crate::client::{ApiVersion, AuthScheme};
use crate::config::Config;
use crate::error::ReportError;
use crate::report::Bucket;

fn stored() -> Config {
    Config {
        jira_url: Some("https://acme.atlassian.net/".to_string()),
        jira_email: Some("a@x.com".to_string()),
        jira_token: Some("stored-token-0001".to_string()),
        auth_scheme: Some(AuthScheme::Basic),
        api_version: Some(ApiVersion::V3),
        done_keywords: None,
        in_progress_keywords: None,
    }
}

#[test]
fn test_cli_context_new_has_no_settings() {
    let context = CliContext::new();
    assert!(matches!(context.tracker_config(), Err(ReportError::Config(_))));
}

#[test]
fn test_stored_scheme_is_used() {
    let context = CliContext::from_config(stored());
    let tracker = context.tracker_config().unwrap();

    assert_eq!(tracker.base_url(), "https://acme.atlassian.net");
    assert_eq!(tracker.auth_scheme(), AuthScheme::Basic);
    assert_eq!(tracker.api_version(), ApiVersion::V3);
}

#[test]
fn test_overrides_replace_settings_and_reset_scheme() {
    let context = CliContextBuilder::new()
        .with_config(stored())
        .with_token(Some("override-token-0002".to_string()))
        .build()
        .unwrap();
    let tracker = context.tracker_config().unwrap();

    assert_eq!(tracker.secret_token(), "override-token-0002");
    assert_eq!(tracker.identity_email(), "a@x.com");
    assert_eq!(tracker.auth_scheme(), AuthScheme::Bearer);
}

#[test]
fn test_invalid_stored_url_is_a_validation_error() {
    let mut config = stored();
    config.jira_url = Some("acme.atlassian.net".to_string());
    let context = CliContext::from_config(config);

    assert!(matches!(context.tracker_config(), Err(ReportError::Validation(_))));
}

#[test]
fn test_configured_keywords_replace_defaults() {
    let mut config = stored();
    config.done_keywords = Some(vec!["Closed".to_string()]);
    let classifier = CliContext::from_config(config).classifier();

    assert_eq!(classifier.bucket_of("Closed"), Bucket::Completed);
    assert_eq!(classifier.bucket_of("Done"), Bucket::Other);
    assert_eq!(classifier.bucket_of("In Progress"), Bucket::InProgress);
}

#[test]
fn test_client_is_reused() {
    let mut context = CliContext::new();
    let first = context.client().unwrap();
    let second = context.client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

fn load_boxed(path: &std::path::Path) -> Result<CliContext, Box<dyn std::error::Error>> {
    Ok(CliContext::load_from(path)?)
}

#[test]
fn test_broken_config_file_keeps_its_error_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_boxed(&path).err().expect("broken file must fail");
    assert!(matches!(err.downcast_ref::<ReportError>(), Some(ReportError::Config(_))));
    assert!(err.to_string().starts_with("Configuration error: "));
}
