use clap::Parser;
use h1_scope::cli::Cli;
use h1_scope::config::Config;
use h1_scope::http::{Credential, ReqwestTransport};
use h1_scope::output::json::JsonOutput;
use h1_scope::output::text::TextOutput;
use h1_scope::output::{OutputFlags, OutputHandler};
use h1_scope::platforms::hackerone::HackerOneClient;
use h1_scope::platforms::{HackerOneAPI, PlatformAPI, print_all_scope};
use h1_scope::progress::ProgressIndicator;
use h1_scope::types::FetchOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate arguments
    cli.validate()?;

    // Load config file if given, defaults otherwise
    let mut config = match cli.config {
        Some(ref path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(ref username) = cli.username {
        config.hackerone.username = Some(username.clone());
    }

    if let Some(ref token) = cli.token {
        config.hackerone.api_token = Some(token.clone());
    }

    if let Some(concurrency) = cli.concurrency {
        config.collector.concurrency = concurrency;
    }

    // Initialize logging
    let log_level = cli.log_level().unwrap_or(config.logging.level.as_str());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Categories are resolved once, before any request
    let options = FetchOptions::new(&cli.categories, cli.bbp_only, cli.visibility())?;

    let (Some(username), Some(token)) = (
        config.hackerone.username.as_deref(),
        config.hackerone.api_token.as_deref(),
    ) else {
        anyhow::bail!(
            "HackerOne credentials missing: pass --username and --token \
            or set them in the [hackerone] config section"
        );
    };

    let transport = Arc::new(ReqwestTransport::new(config.request_timeout())?);
    let client = HackerOneClient::new(
        transport,
        Credential::new(username, token),
        config.client_settings(),
    )?;

    let platform = HackerOneAPI::new(client)
        .with_concurrency(config.collector.concurrency)
        .with_progress(ProgressIndicator::new(
            cli.should_show_progress() && is_terminal::is_terminal(std::io::stderr()),
        ));

    tracing::info!("Starting {} scope harvest...", platform.name());

    let output: Box<dyn OutputHandler> = if cli.json {
        Box::new(JsonOutput::new())
    } else {
        let flags = OutputFlags::parse(&cli.output_flags)?;
        Box::new(TextOutput::new(flags, cli.delimiter.clone()).with_out_of_scope(cli.include_oos))
    };

    print_all_scope(&platform, &options, output.as_ref()).await?;

    Ok(())
}
