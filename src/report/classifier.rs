use crate::constants::{DEFAULT_DONE_KEYWORDS, DEFAULT_IN_PROGRESS_KEYWORDS};
use crate::models::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Completed,
    InProgress,
    Other,
}

/// Issues split by bucket, each list in input order.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub completed: Vec<&'a Issue>,
    pub in_progress: Vec<&'a Issue>,
    pub other: Vec<&'a Issue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub completion_rate: u32,
}

/// Buckets issues by substring-matching their status name against two keyword sets.
///
/// The done set is consulted first, so a status such as "Done (in progress review)"
/// lands in [`Bucket::Completed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    done_keywords: Vec<String>,
    in_progress_keywords: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_DONE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            DEFAULT_IN_PROGRESS_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        )
    }
}

impl Classifier {
    pub fn new(done_keywords: Vec<String>, in_progress_keywords: Vec<String>) -> Self {
        let normalize = |keywords: Vec<String>| {
            keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect()
        };

        Self {
            done_keywords: normalize(done_keywords),
            in_progress_keywords: normalize(in_progress_keywords),
        }
    }

    pub fn bucket_of(&self, status_name: &str) -> Bucket {
        let status = status_name.to_lowercase();

        if self.done_keywords.iter().any(|k| status.contains(k.as_str())) {
            Bucket::Completed
        } else if self.in_progress_keywords.iter().any(|k| status.contains(k.as_str())) {
            Bucket::InProgress
        } else {
            Bucket::Other
        }
    }

    pub fn classify<'a>(&self, issues: &'a [Issue]) -> Buckets<'a> {
        let mut buckets = Buckets::default();

        for issue in issues {
            match self.bucket_of(&issue.status_name) {
                Bucket::Completed => buckets.completed.push(issue),
                Bucket::InProgress => buckets.in_progress.push(issue),
                Bucket::Other => buckets.other.push(issue),
            }
        }

        buckets
    }

    pub fn summarize(&self, issues: &[Issue]) -> Summary {
        let buckets = self.classify(issues);
        let total = issues.len();
        let completed = buckets.completed.len();

        Summary {
            total,
            completed,
            in_progress: buckets.in_progress.len(),
            completion_rate: completion_rate(completed, total),
        }
    }
}

/// Whole-number percentage, rounded half up. Zero when there is nothing to complete.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}
