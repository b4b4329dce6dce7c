pub mod issue;
pub mod search;
pub mod user;

// Re-export commonly used types
pub use issue::{Issue, parse_timestamp};
pub use search::{RawIssue, SearchRequest, SearchResponse};
pub use user::Identity;
