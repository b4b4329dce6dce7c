use super::utils::format_local_timestamp;
use crate::models::Issue;
use crate::report::{completion_rate, ClassifiedReport};

fn push_entry_head(report: &mut String, issue: &Issue) {
    report.push_str(&format!("- [{}] {}\n", issue.key, issue.summary));
    report.push_str(&format!("  - 상태: {}\n", issue.status_name));
    report.push_str(&format!("  - 유형: {}\n", issue.issue_type));
}

pub fn render_markdown(data: &ClassifiedReport) -> String {
    let buckets = data.buckets();

    let mut report = String::from("# 주간 업무 보고서\n\n");
    report.push_str(&format!("**기간**: {}\n", data.period_label));
    report.push_str(&format!("**작성자**: {}\n\n", data.requester_email));

    report.push_str("## 📊 요약\n\n");
    report.push_str(&format!("- 총 이슈: {}개\n", data.total_count));
    report.push_str(&format!("- 완료: {}개\n", data.completed_count));
    report.push_str(&format!("- 진행중: {}개\n", data.in_progress_count));
    report.push_str(&format!(
        "- 완료율: {}%\n\n",
        completion_rate(data.completed_count, data.total_count)
    ));

    if !buckets.completed.is_empty() {
        report.push_str("## ✅ 완료된 작업\n\n");
        for issue in &buckets.completed {
            push_entry_head(&mut report, issue);
            if let Some(resolved) = &issue.resolved_at {
                report.push_str(&format!("  - 완료일: {}\n", format_local_timestamp(resolved)));
            }
            report.push('\n');
        }
    }

    if !buckets.in_progress.is_empty() {
        report.push_str("## 🔄 진행중인 작업\n\n");
        for issue in &buckets.in_progress {
            push_entry_head(&mut report, issue);
            report.push_str(&format!(
                "  - 우선순위: {}\n",
                issue.priority.as_deref().unwrap_or("-")
            ));
            report.push('\n');
        }
    }

    if !buckets.other.is_empty() {
        report.push_str("## 📋 기타 관련 이슈\n\n");
        for issue in &buckets.other {
            push_entry_head(&mut report, issue);
            report.push('\n');
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{prepare_report, Classifier};
    use crate::tests::fixtures::{issue, resolved_issue};

    fn sample() -> ClassifiedReport {
        let issues = vec![
            resolved_issue("WEB-3", "Done", "2024-03-14T12:00:00.000+0000"),
            issue("WEB-2", "In Progress"),
            issue("WEB-1", "To Do"),
        ];
        prepare_report(issues, "a@x.com", 7, &Classifier::default())
    }

    #[test]
    fn test_sections_and_summary() {
        let output = render_markdown(&sample());

        assert!(output.starts_with("# 주간 업무 보고서\n\n**기간**: "));
        assert!(output.contains("- 총 이슈: 3개\n- 완료: 1개\n- 진행중: 1개\n- 완료율: 33%\n"));
        assert!(output.contains("## ✅ 완료된 작업\n\n- [WEB-3]"));
        assert!(output.contains("  - 완료일: 2024. 3. 14.\n"));
        assert!(output.contains("## 🔄 진행중인 작업\n\n- [WEB-2]"));
        assert!(output.contains("  - 우선순위: Medium\n"));
        assert!(output.contains("## 📋 기타 관련 이슈\n\n- [WEB-1]"));
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let report = prepare_report(vec![issue("WEB-9", "Done")], "a@x.com", 7, &Classifier::default());
        let output = render_markdown(&report);

        assert!(output.contains("완료된 작업"));
        assert!(!output.contains("진행중인 작업"));
        assert!(!output.contains("기타 관련 이슈"));
    }

    #[test]
    fn test_entries_keep_input_order() {
        let issues = vec![issue("B-9", "Done"), issue("B-1", "Done"), issue("B-5", "Done")];
        let output = render_markdown(&prepare_report(issues, "a@x.com", 7, &Classifier::default()));

        let positions: Vec<usize> = ["[B-9]", "[B-1]", "[B-5]"]
            .iter()
            .map(|key| output.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let report = sample();
        assert_eq!(render_markdown(&report), render_markdown(&report));
    }
}
