pub const CONFIG_FILE: &str = ".jira-report-config.json";

pub const MYSELF_PATH: &str = "myself";
pub const SEARCH_PATH: &str = "search";

/// Hard cap on a single search page. Results past this are not fetched.
pub const MAX_RESULTS: u32 = 100;

pub const DEFAULT_DAYS_BACK: u32 = 7;
pub const DAYS_BACK_CHOICES: [&str; 4] = ["3", "7", "14", "30"];

// Fields requested from the search endpoint
pub const SEARCH_FIELDS: [&str; 9] = [
    "summary",
    "status",
    "assignee",
    "created",
    "updated",
    "resolutiondate",
    "issuetype",
    "priority",
    "worklog",
];

pub const SEARCH_EXPAND: [&str; 1] = ["worklog"];

pub const DEFAULT_DONE_KEYWORDS: [&str; 3] = ["done", "완료", "resolved"];
pub const DEFAULT_IN_PROGRESS_KEYWORDS: [&str; 3] = ["progress", "진행", "개발"];

pub const ENV_JIRA_URL: &str = "JIRA_URL";
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";
pub const ENV_JIRA_TOKEN: &str = "JIRA_TOKEN";
