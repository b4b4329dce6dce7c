use std::process;
use colored::*;

use clap::{Arg, Command};
use jira_report::commands::{handle_auth, handle_report, handle_test_connection, handle_whoami};
use jira_report::constants::DAYS_BACK_CHOICES;
use jira_report::logging::{init_logging, log_error, log_info};

fn build_cli() -> Command {
    Command::new("jira-report")
        .about("Jira weekly report - Summarize your recent Jira activity")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("report")
                .about("Generate a weekly report from issues assigned to you or with your work logs")
                .arg(
                    Arg::new("days")
                        .long("days")
                        .short('d')
                        .value_name("DAYS")
                        .help("How many days back to look")
                        .value_parser(DAYS_BACK_CHOICES)
                        .default_value("7")
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format")
                        .value_parser(["markdown", "text"])
                        .default_value("markdown")
                )
        )
        .subcommand(
            Command::new("test-connection")
                .about("Check the Jira settings by trying each authentication method")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Jira URL to test instead of the stored one")
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .value_name("EMAIL")
                        .help("Email to test instead of the stored one")
                )
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("API token or PAT to test instead of the stored one")
                )
        )
        .subcommand(
            Command::new("auth")
                .about("Verify and save Jira credentials")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Jira URL (e.g. https://company.atlassian.net)")
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .value_name("EMAIL")
                        .help("Email of your Jira account")
                )
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("API token or Personal Access Token")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show stored settings")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("whoami")
                .about("Show the Jira account behind the stored credentials")
        )
}

#[tokio::main]
async fn main() {
    // A broken log directory should not stop the report
    if let Err(e) = init_logging() {
        eprintln!("{} {}", "Warning: logging disabled:".yellow(), e);
    }

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("report", sub_matches)) => handle_report(sub_matches).await,
        Some(("test-connection", sub_matches)) => handle_test_connection(sub_matches).await,
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("whoami", sub_matches)) => handle_whoami(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'jira-report --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }

    log_info("Done");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_report_defaults() {
        let matches = build_cli().get_matches_from(["jira-report", "report"]);
        let (_, report) = matches.subcommand().unwrap();
        assert_eq!(report.get_one::<String>("days").map(String::as_str), Some("7"));
        assert_eq!(report.get_one::<String>("format").map(String::as_str), Some("markdown"));
    }

    #[test]
    fn test_days_outside_choices_rejected() {
        let result = build_cli().try_get_matches_from(["jira-report", "report", "--days", "5"]);
        assert!(result.is_err());
    }
}
