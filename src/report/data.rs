use chrono::{Days, Local, NaiveDate};

use super::classifier::{Buckets, Classifier, Summary};
use crate::formatting::utils::format_local_date;
use crate::models::Issue;

/// Everything a renderer needs. Rebuilt for every report, never stored.
#[derive(Debug, Clone)]
pub struct ClassifiedReport {
    pub period_label: String,
    pub total_count: usize,
    pub completed_count: usize,
    pub in_progress_count: usize,
    pub issues: Vec<Issue>,
    pub requester_email: String,
    classifier: Classifier,
}

impl ClassifiedReport {
    /// Bucket membership is recomputed from status names on each call.
    pub fn buckets(&self) -> Buckets<'_> {
        self.classifier.classify(&self.issues)
    }

    pub fn summary(&self) -> Summary {
        self.classifier.summarize(&self.issues)
    }
}

pub fn prepare_report(
    issues: Vec<Issue>,
    requester_email: &str,
    days_back: u32,
    classifier: &Classifier,
) -> ClassifiedReport {
    prepare_report_on(issues, requester_email, days_back, classifier, Local::now().date_naive())
}

/// Like [`prepare_report`] with an explicit end date for the period label.
pub fn prepare_report_on(
    issues: Vec<Issue>,
    requester_email: &str,
    days_back: u32,
    classifier: &Classifier,
    today: NaiveDate,
) -> ClassifiedReport {
    let start = today
        .checked_sub_days(Days::new(u64::from(days_back)))
        .unwrap_or(NaiveDate::MIN);
    let summary = classifier.summarize(&issues);

    ClassifiedReport {
        period_label: format!("{} ~ {}", format_local_date(start), format_local_date(today)),
        total_count: summary.total,
        completed_count: summary.completed,
        in_progress_count: summary.in_progress,
        issues,
        requester_email: requester_email.to_string(),
        classifier: classifier.clone(),
    }
}
