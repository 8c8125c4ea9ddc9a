use tracing::{debug, info_span, Instrument};

use crate::config::AppConfig;
use crate::error::AppError;

/// The application behind the `nutriscore-agent` binary.
///
/// The graph workflow it is meant to host does not exist yet, so [`App::run`]
/// has no success path.
///
/// # Example
///
/// ```ignore
/// let app = App::new(AppConfig::from_env()?);
/// let err = app.run().await.unwrap_err();
/// assert!(err.is_unimplemented());
/// ```
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Runs the application entry point.
    ///
    /// Always returns [`AppError::Unimplemented`]. Writes nothing, changes no
    /// state, and returns an equal error on every call.
    pub async fn run(&self) -> Result<(), AppError> {
        async {
            debug!("Entry point invoked");
            Err(AppError::unimplemented())
        }
        .instrument(info_span!("entry_point"))
        .await
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
