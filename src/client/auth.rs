use std::fmt;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::config::TrackerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    Bearer,
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V2,
    V3,
}

impl ApiVersion {
    pub fn path_segment(self) -> &'static str {
        match self {
            ApiVersion::V2 => "2",
            ApiVersion::V3 => "3",
        }
    }
}

/// A scheme/version pair the client can authenticate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCandidate {
    pub scheme: AuthScheme,
    pub version: ApiVersion,
}

/// Order in which connection verification tries credentials.
pub const AUTH_CASCADE: [AuthCandidate; 3] = [
    AuthCandidate { scheme: AuthScheme::Bearer, version: ApiVersion::V3 },
    AuthCandidate { scheme: AuthScheme::Basic, version: ApiVersion::V3 },
    AuthCandidate { scheme: AuthScheme::Bearer, version: ApiVersion::V2 },
];

impl AuthCandidate {
    /// Label used when listing cascade failures, e.g. `Basic Auth (v3)`.
    pub fn label(&self) -> String {
        let scheme = match self.scheme {
            AuthScheme::Bearer => "Bearer Token",
            AuthScheme::Basic => "Basic Auth",
        };
        let version = match self.version {
            ApiVersion::V2 => "v2",
            ApiVersion::V3 => "v3",
        };
        format!("{} ({})", scheme, version)
    }
}

// Shown to the operator as the scheme that worked: `Bearer`, `Basic`, `Bearer (API v2)`
impl fmt::Display for AuthCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = match self.scheme {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::Basic => "Basic",
        };
        match self.version {
            ApiVersion::V3 => write!(f, "{}", scheme),
            ApiVersion::V2 => write!(f, "{} (API v2)", scheme),
        }
    }
}

fn basic_credentials(email: &str, token: &str) -> String {
    general_purpose::STANDARD.encode(format!("{}:{}", email, token))
}

/// Value for the `Authorization` header of `config`.
pub fn authorization_header(config: &TrackerConfig) -> String {
    match config.auth_scheme() {
        AuthScheme::Bearer => format!("Bearer {}", config.secret_token()),
        AuthScheme::Basic => format!(
            "Basic {}",
            basic_credentials(config.identity_email(), config.secret_token())
        ),
    }
}

/// `***` plus the last four characters. Short tokens are fully starred.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", suffix)
}

/// Replace the token, and the Basic credential derived from it, wherever they appear in `text`.
///
/// Tokens of eight characters or fewer are only replaced where they
/// stand alone, so they do not eat into the surrounding words.
pub fn redact_secret(text: &str, email: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    let masked = mask_secret(secret);
    let text = text.replace(&basic_credentials(email, secret), &masked);

    if secret.chars().count() > SHORT_SECRET_LEN {
        text.replace(secret, &masked)
    } else {
        replace_standalone(&text, secret, &masked)
    }
}

const SHORT_SECRET_LEN: usize = 8;

fn replace_standalone(text: &str, needle: &str, replacement: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '-' || c == '_';
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for (start, _) in text.match_indices(needle) {
        let end = start + needle.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if before.map_or(false, is_word) || after.map_or(false, is_word) {
            continue;
        }
        result.push_str(&text[last..start]);
        result.push_str(replacement);
        last = end;
    }
    result.push_str(&text[last..]);
    result
}
