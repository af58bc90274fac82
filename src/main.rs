//! SSM Starter - load AWS SSM parameters into the environment, then start your app.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ssm_starter::cli::output;
use ssm_starter::cli::{execute, Cli};
use ssm_starter::core::constants::LOG_VAR;
use ssm_starter::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ssm_starter=debug")
        } else {
            EnvFilter::new("ssm_starter=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    match execute(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let suggestion = match &e {
                Error::Config(_) => Some("export AWS_REGION (for example AWS_REGION=us-east-1)"),
                Error::Validation(_) => Some(
                    "use fully qualified names (/dev/app) without AWS_ENV, or relative names (app) with AWS_ENV",
                ),
                Error::DuplicatesFound(_) => {
                    Some("remove --abort-if-duplicates or pass --overwrite-if-duplicates")
                }
                _ => None,
            };

            output::error(&format!("SSM Starter - ERROR: {}", e));
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}
