use crate::client::auth::mask_secret;
use crate::report::ConnectionReport;

const TROUBLESHOOTING: [&str; 6] = [
    "Jira URL이 올바른지 확인 (예: https://company.atlassian.net)",
    "이메일 주소가 정확한지 확인",
    "PAT 토큰이 유효한지 확인",
    "PAT 권한에 'Read:jira-work-management' 포함되어 있는지 확인",
    "네트워크 연결 상태 확인",
    "회사 VPN 연결 필요한지 확인",
];

pub fn render_connection_success(report: &ConnectionReport, url: &str) -> String {
    let mut message = String::from("✅ 연결 성공!\n\n");
    message.push_str(&format!("사용자: {}\n", report.identity.display_name));
    message.push_str(&format!("이메일: {}\n", report.identity.email_address));
    message.push_str(&format!("Jira URL: {}\n", url));
    message.push_str(&format!("인증 방식: {}", report.scheme_used));
    message
}

/// `error_text` must already have the token redacted.
pub fn render_connection_failure(error_text: &str, url: &str, email: &str, token: &str) -> String {
    let mut message = String::from("❌ 연결 실패\n\n");
    message.push_str(&format!("오류: {}\n\n", error_text));

    message.push_str("설정 정보:\n");
    message.push_str(&format!("• URL: {}\n", url));
    message.push_str(&format!("• 이메일: {}\n", email));
    message.push_str(&format!("• 토큰: {}\n\n", mask_secret(token)));

    message.push_str("확인사항:");
    for item in TROUBLESHOOTING {
        message.push_str(&format!("\n• {}", item));
    }
    message
}
