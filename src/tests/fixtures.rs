use crate::models::{parse_timestamp, Issue};

/// A Task with Medium priority, created and updated on 2024-03-12.
pub fn issue(key: &str, status: &str) -> Issue {
    let stamp = parse_timestamp("2024-03-12T10:00:00.000+0000").unwrap();
    Issue {
        key: key.to_string(),
        summary: format!("Summary of {}", key),
        status_name: status.to_string(),
        issue_type: "Task".to_string(),
        priority: Some("Medium".to_string()),
        created_at: stamp,
        updated_at: stamp,
        resolved_at: None,
    }
}

pub fn resolved_issue(key: &str, status: &str, resolved_at: &str) -> Issue {
    Issue {
        resolved_at: parse_timestamp(resolved_at),
        ..issue(key, status)
    }
}
