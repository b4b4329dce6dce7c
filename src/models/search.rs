use serde::{Deserialize, Serialize};

/// Body of `POST /rest/api/{2|3}/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    pub jql: &'a str,
    pub expand: &'a [&'a str],
    pub fields: &'a [&'a str],
    pub max_results: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

// Everything is optional on the wire; `Issue::try_from` decides what is required.
#[derive(Debug, Deserialize)]
pub struct RawIssue {
    pub key: Option<String>,
    pub fields: Option<RawFields>,
}

#[derive(Debug, Deserialize)]
pub struct RawFields {
    pub summary: Option<String>,
    pub status: Option<NamedValue>,
    pub issuetype: Option<NamedValue>,
    pub priority: Option<NamedValue>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub resolutiondate: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NamedValue {
    pub name: Option<String>,
}

impl NamedValue {
    pub fn into_name(named: Option<NamedValue>) -> Option<String> {
        named.and_then(|n| n.name)
    }
}
