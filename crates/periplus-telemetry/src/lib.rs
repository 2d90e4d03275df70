//! Logging setup for periplus.
//!
//! Library crates in this workspace only emit `tracing` events. This crate
//! turns a [`LoggingConfig`](periplus_config::LoggingConfig) into an installed
//! subscriber so binaries and tests can see them.
//!
//! # Example
//!
//! ```rust,ignore
//! use periplus_config::LoggingConfig;
//! use periplus_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::from(&LoggingConfig::default()))?;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
