use chrono::{DateTime, FixedOffset};

use super::search::{NamedValue, RawIssue};
use crate::error::ReportError;

/// A validated work item. Built from the loosely typed search payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status_name: String,
    pub issue_type: String,
    pub priority: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub resolved_at: Option<DateTime<FixedOffset>>,
}

/// Parse a Jira timestamp (`2024-03-14T09:00:00.000+0900`) or an RFC 3339 one.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
}

fn missing(key: &str, field: &str) -> ReportError {
    ReportError::MalformedResponse(format!("issue {} is missing '{}'", key, field))
}

fn required_timestamp(key: &str, field: &str, value: Option<String>) -> Result<DateTime<FixedOffset>, ReportError> {
    let raw = value.ok_or_else(|| missing(key, field))?;
    parse_timestamp(&raw).ok_or_else(|| {
        ReportError::MalformedResponse(format!("issue {} has an unreadable '{}': {}", key, field, raw))
    })
}

impl TryFrom<RawIssue> for Issue {
    type Error = ReportError;

    fn try_from(raw: RawIssue) -> Result<Self, Self::Error> {
        let key = raw.key.ok_or_else(|| missing("<unknown>", "key"))?;
        let fields = raw.fields.ok_or_else(|| missing(&key, "fields"))?;

        let summary = fields.summary.ok_or_else(|| missing(&key, "summary"))?;
        let status_name = NamedValue::into_name(fields.status).ok_or_else(|| missing(&key, "status"))?;
        let issue_type = NamedValue::into_name(fields.issuetype).ok_or_else(|| missing(&key, "issuetype"))?;
        let created_at = required_timestamp(&key, "created", fields.created)?;
        let updated_at = required_timestamp(&key, "updated", fields.updated)?;

        // An unparseable resolution date is treated like an absent one
        let resolved_at = fields.resolutiondate.as_deref().and_then(parse_timestamp);

        Ok(Issue {
            key,
            summary,
            status_name,
            issue_type,
            priority: NamedValue::into_name(fields.priority),
            created_at,
            updated_at,
            resolved_at,
        })
    }
}
