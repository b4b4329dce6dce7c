use clap::ArgMatches;
use crate::cli_context::CliContext;

pub async fn handle_whoami(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let config = context.tracker_config()?;
    let client = context.client()?;

    let identity = client
        .resolve_identity(&config)
        .await
        .map_err(|e| e.redacted(config.identity_email(), config.secret_token()))?;
    println!("Logged in as: {} ({})", identity.display_name, identity.email_address);
    println!("Auth: {}", config.candidate());

    Ok(())
}
