pub mod auth;
pub mod jira_client;

pub use auth::{AUTH_CASCADE, ApiVersion, AuthCandidate, AuthScheme};
pub use jira_client::{JiraClient, build_recent_activity_query, build_recent_activity_query_on};
