//! `nutriscore-agent` binary.
//!
//! Loads [`AppConfig`] from the environment, installs tracing, and invokes
//! [`App::run`]. Every run ends with a non-zero exit status.

use std::process::ExitCode;

use nutriscore_agent::config::AppConfig;
use nutriscore_agent::lifecycle::{setup_tracing, App};
use nutriscore_agent::AppError;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "Application failed");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn start() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    setup_tracing(&config)?;

    App::new(config).run().await
}
