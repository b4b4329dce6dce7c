use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;
use crate::constants::DEFAULT_DAYS_BACK;
use crate::error::ReportError;
use crate::formatting::ReportFormat;
use crate::report::{generate_weekly_report, ReportOutcome};

pub async fn handle_report(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let config = context.tracker_config()?;
    let client = context.client()?;

    let days_back = match matches.get_one::<String>("days") {
        Some(days) => days
            .parse::<u32>()
            .map_err(|_| ReportError::Validation(format!("Invalid number of days: {}", days)))?,
        None => DEFAULT_DAYS_BACK,
    };
    let format = matches
        .get_one::<String>("format")
        .map(|s| ReportFormat::parse(s))
        .unwrap_or(ReportFormat::Markdown);

    eprintln!("{}", "Jira 이슈를 조회하는 중...".dimmed());

    match generate_weekly_report(&client, &config, days_back, format, &context.classifier()).await {
        Ok(ReportOutcome::Document(report)) => {
            print!("{}", report);
            Ok(())
        }
        Ok(outcome @ ReportOutcome::Empty { .. }) => {
            eprintln!("{}", outcome.to_string().yellow());
            Ok(())
        }
        Err(e) => Err(e.redacted(config.identity_email(), config.secret_token()).into()),
    }
}
