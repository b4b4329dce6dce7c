use super::utils::format_local_timestamp;
use crate::models::Issue;
use crate::report::{completion_rate, ClassifiedReport};

fn entry(issue: &Issue, extra: Option<String>) -> String {
    let mut line = format!(
        "• [{}] {}\n  상태: {}, 유형: {}",
        issue.key, issue.summary, issue.status_name, issue.issue_type
    );
    if let Some(extra) = extra {
        line.push_str(", ");
        line.push_str(&extra);
    }
    line.push('\n');
    line
}

/// Plain text variant. Issues outside the completed and in-progress buckets are left out.
pub fn render_plain_text(data: &ClassifiedReport) -> String {
    let buckets = data.buckets();

    let mut report = String::from("주간 업무 보고서\n");
    report.push_str("===============\n\n");
    report.push_str(&format!("기간: {}\n", data.period_label));
    report.push_str(&format!("작성자: {}\n\n", data.requester_email));

    report.push_str("요약:\n");
    report.push_str(&format!("- 총 이슈: {}개\n", data.total_count));
    report.push_str(&format!("- 완료: {}개\n", data.completed_count));
    report.push_str(&format!("- 진행중: {}개\n", data.in_progress_count));
    report.push_str(&format!(
        "- 완료율: {}%\n\n",
        completion_rate(data.completed_count, data.total_count)
    ));

    if !buckets.completed.is_empty() {
        report.push_str("완료된 작업:\n");
        for issue in &buckets.completed {
            let resolved = issue
                .resolved_at
                .as_ref()
                .map(|at| format!("완료일: {}", format_local_timestamp(at)));
            report.push_str(&entry(issue, resolved));
        }
        report.push('\n');
    }

    if !buckets.in_progress.is_empty() {
        report.push_str("진행중인 작업:\n");
        for issue in &buckets.in_progress {
            let priority = format!("우선순위: {}", issue.priority.as_deref().unwrap_or("-"));
            report.push_str(&entry(issue, Some(priority)));
        }
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{prepare_report, Classifier};
    use crate::tests::fixtures::{issue, resolved_issue};

    #[test]
    fn test_plain_layout() {
        let issues = vec![
            resolved_issue("OPS-7", "Resolved", "2024-05-02T12:00:00.000+0000"),
            issue("OPS-8", "진행중"),
            issue("OPS-9", "Open"),
        ];
        let output = render_plain_text(&prepare_report(issues, "a@x.com", 7, &Classifier::default()));

        assert!(output.starts_with("주간 업무 보고서\n===============\n\n기간: "));
        assert!(output.contains("- 완료율: 33%\n"));
        assert!(output.contains(
            "완료된 작업:\n• [OPS-7] Summary of OPS-7\n  상태: Resolved, 유형: Task, 완료일: 2024. 5. 2.\n\n"
        ));
        assert!(output.contains(
            "진행중인 작업:\n• [OPS-8] Summary of OPS-8\n  상태: 진행중, 유형: Task, 우선순위: Medium\n\n"
        ));
        assert!(!output.contains("OPS-9"));
    }

    #[test]
    fn test_completed_without_resolution_date() {
        let output = render_plain_text(&prepare_report(
            vec![issue("OPS-1", "Done")],
            "a@x.com",
            3,
            &Classifier::default(),
        ));
        assert!(output.contains("  상태: Done, 유형: Task\n"));
        assert!(!output.contains("진행중인 작업"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let issues = vec![
            resolved_issue("OPS-7", "Done", "2024-05-02T12:00:00.000+0000"),
            issue("OPS-8", "In Progress"),
        ];
        let report = prepare_report(issues, "a@x.com", 7, &Classifier::default());
        assert_eq!(render_plain_text(&report), render_plain_text(&report));
    }
}
