#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # NutriScore Agent
//!
//! Entry point for an application meant to host a graph-orchestrated
//! nutrition-scoring workflow. The workflow has not been built: running the
//! application always fails with [`AppError::Unimplemented`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`lifecycle`] - the [`App`](lifecycle::App) entry point and [`setup_tracing`](lifecycle::setup_tracing).
//! - [`config`] - [`AppConfig`](config::AppConfig), read from the environment.
//! - [`error`] - [`AppError`], the crate-wide error type.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Exits with status 1 and reports the unimplemented entry point
//! RUST_LOG=debug cargo run
//!
//! cargo test
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;

pub use error::AppError;
