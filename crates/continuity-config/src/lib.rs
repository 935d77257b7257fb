//! Configuration models and loading.
//!
//! This crate owns the Continuity config schema, JSON5 file loading,
//! environment overrides and validation used by the server and CLI.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Loader options and environment variable names.
pub use loader::{ConfigLoadOptions, DEFAULT_CONFIG_FILE, env_vars};
/// Configuration schema models.
pub use model::*;
