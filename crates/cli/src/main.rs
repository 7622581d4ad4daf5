//! OutageSync - site outage filtering and submission
//!
//! Main entry point for the `outagesync` binary.

// The submission response goes to stdout and fatal errors to stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use outagesync_cli::{error_kind, logging, run, Cli};
use outagesync_domain::constants::MISSING_API_KEY_MESSAGE;
use outagesync_infra::config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging FIRST so we can see .env loading
    if let Err(err) = logging::init(cli.log_format) {
        eprintln!("{err}");
    }

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(err) => tracing::debug!(error = %err, "No .env file loaded"),
    }

    let mut config = match config::load(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config);

    if config.api_key().is_err() {
        eprintln!("{MISSING_API_KEY_MESSAGE}");
        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(report) => {
            match serde_json::to_string_pretty(&report.response) {
                Ok(body) => println!("{body}"),
                Err(_) => println!("{}", report.response),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(kind = error_kind(&err), error = %err, "sync run failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
