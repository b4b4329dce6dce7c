use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContextBuilder;
use crate::report::test_connection;

pub async fn handle_test_connection(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContextBuilder::new()
        .with_url(matches.get_one::<String>("url").cloned())
        .with_email(matches.get_one::<String>("email").cloned())
        .with_token(matches.get_one::<String>("token").cloned())
        .build()?;
    let client = context.client()?;
    let (url, email, token) = context.settings();

    eprintln!("{}", "Jira 연결을 테스트하는 중...".dimmed());

    let status = test_connection(&client, &url, &email, &token).await;
    println!("{}", status.message);

    if status.connected {
        Ok(())
    } else {
        Err("connection test failed".into())
    }
}
