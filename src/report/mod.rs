pub mod classifier;
pub mod data;
pub mod orchestrator;

pub use classifier::{Bucket, Buckets, Classifier, Summary, completion_rate};
pub use data::{ClassifiedReport, prepare_report, prepare_report_on};
pub use orchestrator::{
    ConnectionReport, ConnectionStatus, ReportOutcome, generate_weekly_report, generate_weekly_report_on, test_connection, verify_connection,
};
