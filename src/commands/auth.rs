use clap::ArgMatches;
use colored::*;
use crate::cli_context::{CliContext, CliContextBuilder};
use crate::client::auth::mask_secret;
use crate::config::TrackerConfig;
use crate::report::verify_connection;

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if matches.get_flag("show") {
        let context = CliContext::load()?;
        let config = context.config();
        println!("URL: {}", config.jira_url.as_deref().unwrap_or("(not set)"));
        println!("Email: {}", config.jira_email.as_deref().unwrap_or("(not set)"));
        match &config.jira_token {
            Some(token) => println!("Token: {}", mask_secret(token)),
            None => println!("Token: (not set)"),
        }
        if let (Some(scheme), Some(version)) = (config.auth_scheme, config.api_version) {
            println!("Auth: {:?} / {:?}", scheme, version);
        }
        return Ok(());
    }

    let (Some(url), Some(email), Some(token)) = (
        matches.get_one::<String>("url"),
        matches.get_one::<String>("email"),
        matches.get_one::<String>("token"),
    ) else {
        println!("Usage: jira-report auth --url <URL> --email <EMAIL> --token <TOKEN> or jira-report auth --show");
        return Ok(());
    };

    let tracker = TrackerConfig::new(url, email, token)?;
    let mut context = CliContextBuilder::new().build()?;
    let client = context.client()?;

    // Only settings that pass the cascade are stored
    let report = verify_connection(&client, &tracker)
        .await
        .map_err(|e| e.redacted(tracker.identity_email(), tracker.secret_token()))?;
    context.remember(&tracker, report.scheme_used)?;

    println!(
        "{} Connected as: {} ({}) using {}",
        "✅".green(),
        report.identity.display_name,
        report.identity.email_address,
        report.scheme_used
    );
    println!("Settings saved successfully!");
    Ok(())
}
