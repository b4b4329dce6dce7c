// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod report;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::JiraClient;
pub use config::{Config, TrackerConfig, load_config, save_config};
pub use error::{ReportError, ReportResult};
pub use formatting::ReportFormat;
pub use models::*;
pub use report::{Classifier, ClassifiedReport, ReportOutcome, generate_weekly_report, verify_connection};
