//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! ## Configuration
//!
//! - **Filter** comes from [`AppConfig::log_filter`], which reads `RUST_LOG`.
//! - **Format** is compact by default and hides the module prefix (`with_target(false)`).
//!   Set `NUTRISCORE_LOG_FORMAT=full` for the multi-field format.
//! - **Writer** is always stderr. stdout stays empty. Colour codes are only
//!   emitted when stderr is a terminal.
//!
//! ```bash
//! # Only the final error line
//! cargo run
//!
//! # Show the entry point span and debug events
//! RUST_LOG=debug cargo run
//! ```

use std::io::IsTerminal;

use crate::config::AppConfig;
use crate::error::AppError;

/// Installs the global subscriber described by `config`.
///
/// Fails with [`AppError::Config`] for an invalid filter directive and with
/// [`AppError::Tracing`] when a global subscriber is already set.
pub fn setup_tracing(config: &AppConfig) -> Result<(), AppError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let installed = if config.compact {
        builder.compact().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| AppError::Tracing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_config_error() {
        let config = AppConfig {
            log_filter: "nutriscore_agent=loud".to_string(),
            compact: true,
        };
        assert!(matches!(setup_tracing(&config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_second_install_fails() {
        let config = AppConfig::default();
        // Another test in this binary may have installed one already.
        let first = setup_tracing(&config);
        assert!(
            matches!(first, Ok(()) | Err(AppError::Tracing(_))),
            "unexpected first install result: {first:?}"
        );
        assert!(matches!(setup_tracing(&config), Err(AppError::Tracing(_))));
    }
}
