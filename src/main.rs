//! rss-grabber - CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use rss_grabber::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    http::HttpClient,
    logging::{self, LogSettings},
    output::print_error,
    pipeline::Pipeline,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(&LogSettings::new(args.debug));

    match run(args).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Load configuration
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load(&config_path)?;
    tracing::debug!("Loaded configuration from {}", config_path.display());

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let client = HttpClient::new(args.timeout.map(Duration::from_secs))?;

    // Item failures are logged by the pipeline and do not change the exit code.
    Pipeline::new(config, client)
        .with_progress(args.progress)
        .run()
        .await?;

    Ok(())
}
