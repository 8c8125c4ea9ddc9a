//! Application lifecycle and observability setup.
//!
//! - [`App`] - owns the runtime configuration and exposes the entry point
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod app;
pub mod tracing;

pub use self::app::App;
pub use self::tracing::setup_tracing;
