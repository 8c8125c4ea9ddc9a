//! Runtime configuration gathered from the process environment.
//!
//! | Variable                | Meaning                                  | Default   |
//! |-------------------------|------------------------------------------|-----------|
//! | `RUST_LOG`              | `EnvFilter` directive for log output     | `warn`    |
//! | `NUTRISCORE_LOG_FORMAT` | `compact` or `full` log line format      | `compact` |

use std::env::VarError;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const LOG_FORMAT_VAR: &str = "NUTRISCORE_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings that shape how the application runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Filter directive passed to [`EnvFilter`].
    pub log_filter: String,
    /// Compact single-line log output instead of the full format.
    pub compact: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compact: true,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_var)
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value, `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Result<Option<String>, AppError>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR)? {
            let filter = filter.trim();
            if !filter.is_empty() {
                config.log_filter = filter.to_string();
            }
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR)? {
            config.compact = match format.trim().to_ascii_lowercase().as_str() {
                "" | "compact" => true,
                "full" => false,
                other => {
                    return Err(AppError::Config(format!(
                        "{LOG_FORMAT_VAR} must be 'compact' or 'full', got '{other}'"
                    )))
                }
            };
        }

        Ok(config)
    }

    /// Parses [`AppConfig::log_filter`] into an [`EnvFilter`].
    pub fn env_filter(&self) -> Result<EnvFilter, AppError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            AppError::Config(format!("invalid log filter '{}': {e}", self.log_filter))
        })
    }
}

/// Reads `key` from the process environment. A value that is not valid
/// UTF-8 is a configuration error rather than an unset variable.
fn env_var(key: &str) -> Result<Option<String>, AppError> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(AppError::Config(format!(
            "{key} is not valid UTF-8: {raw:?}"
        ))),
    }
}
