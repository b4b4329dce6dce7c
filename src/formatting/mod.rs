pub mod connection;
pub mod markdown;
pub mod plain;
pub mod utils;

pub use markdown::render_markdown;
pub use plain::render_plain_text;
pub use utils::{format_local_date, format_local_timestamp};

use crate::report::ClassifiedReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    PlainText,
}

impl ReportFormat {
    /// Unrecognized names fall back to plain text.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "markdown" | "md" => ReportFormat::Markdown,
            _ => ReportFormat::PlainText,
        }
    }
}

pub fn render(report: &ClassifiedReport, format: ReportFormat) -> String {
    match format {
        ReportFormat::Markdown => render_markdown(report),
        ReportFormat::PlainText => render_plain_text(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(ReportFormat::parse("markdown"), ReportFormat::Markdown);
        assert_eq!(ReportFormat::parse("MD"), ReportFormat::Markdown);
        assert_eq!(ReportFormat::parse("text"), ReportFormat::PlainText);
        assert_eq!(ReportFormat::parse("html"), ReportFormat::PlainText);
    }
}
