use std::fmt;

use crate::client::auth::{mask_secret, ApiVersion, AuthCandidate, AuthScheme};
use crate::error::{ReportError, ReportResult};

/// Connection settings for one request attempt.
///
/// Only constructible through [`TrackerConfig::new`], so every value that reaches
/// the client has a non-empty URL, email and token and an `http(s)` base URL.
#[derive(Clone, PartialEq)]
pub struct TrackerConfig {
    base_url: String,
    identity_email: String,
    secret_token: String,
    auth_scheme: AuthScheme,
    api_version: ApiVersion,
}

impl TrackerConfig {
    pub fn new(base_url: &str, identity_email: &str, secret_token: &str) -> ReportResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        let identity_email = identity_email.trim();
        let secret_token = secret_token.trim();

        if base_url.is_empty() || identity_email.is_empty() || secret_token.is_empty() {
            return Err(ReportError::Validation(
                "All fields are required: Jira URL, email and API token.".to_string(),
            ));
        }

        if !base_url.starts_with("http") {
            return Err(ReportError::Validation(
                "Jira URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            identity_email: identity_email.to_string(),
            secret_token: secret_token.to_string(),
            auth_scheme: AuthScheme::Bearer,
            api_version: ApiVersion::V3,
        })
    }

    /// A copy of this config that authenticates with `candidate` instead.
    pub fn with_candidate(&self, candidate: AuthCandidate) -> Self {
        Self {
            auth_scheme: candidate.scheme,
            api_version: candidate.version,
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn identity_email(&self) -> &str {
        &self.identity_email
    }

    pub fn secret_token(&self) -> &str {
        &self.secret_token
    }

    pub fn auth_scheme(&self) -> AuthScheme {
        self.auth_scheme
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    pub fn candidate(&self) -> AuthCandidate {
        AuthCandidate {
            scheme: self.auth_scheme,
            version: self.api_version,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/rest/api/{}/{}", self.base_url, self.api_version.path_segment(), path)
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("base_url", &self.base_url)
            .field("identity_email", &self.identity_email)
            .field("secret_token", &mask_secret(&self.secret_token))
            .field("auth_scheme", &self.auth_scheme)
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = TrackerConfig::new("https://acme.atlassian.net/", "a@x.com", "tok-123456789").unwrap();
        assert_eq!(config.base_url(), "https://acme.atlassian.net");
        assert_eq!(config.endpoint("myself"), "https://acme.atlassian.net/rest/api/3/myself");
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        for (url, email, token) in [
            ("", "a@x.com", "tok"),
            ("https://acme.atlassian.net", "  ", "tok"),
            ("https://acme.atlassian.net", "a@x.com", ""),
        ] {
            assert!(matches!(
                TrackerConfig::new(url, email, token),
                Err(ReportError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_url_without_scheme_is_rejected() {
        let err = TrackerConfig::new("acme.atlassian.net", "a@x.com", "tok").unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_with_candidate_leaves_original_untouched() {
        let config = TrackerConfig::new("https://jira.local", "a@x.com", "tok").unwrap();
        let v2 = config.with_candidate(AuthCandidate {
            scheme: AuthScheme::Basic,
            version: ApiVersion::V2,
        });

        assert_eq!(config.auth_scheme(), AuthScheme::Bearer);
        assert_eq!(config.api_version(), ApiVersion::V3);
        assert_eq!(v2.endpoint("search"), "https://jira.local/rest/api/2/search");
        assert_eq!(v2.auth_scheme(), AuthScheme::Basic);
    }

    #[test]
    fn test_debug_masks_token() {
        let config = TrackerConfig::new("https://jira.local", "a@x.com", "super-secret-token-9876").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-token-9876"));
        assert!(debug.contains("***9876"));
    }
}
