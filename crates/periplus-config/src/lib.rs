//! Typed configuration for periplus.
//!
//! This crate provides the configuration that describes one API document:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Server entry validation (URL syntax, enum/default agreement)
//!
//! # Overview
//!
//! The configuration is built around [`PeriplusConfig`]:
//!
//! - [`ApiInfo`] - API name, description, version and contact
//! - [`ServerDescriptor`] - servers the API is reachable at, with [`ServerVariable`]s
//! - [`LoggingConfig`] - log level and format
//!
//! # Example
//!
//! ```no_run
//! use periplus_config::ConfigLoader;
//!
//! # fn main() -> Result<(), periplus_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_file("periplus.toml")?
//!     .with_env_prefix("PERIPLUS")
//!     .load()?;
//!
//! println!("Document will be written to: {}", config.out_file.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! out_file = "openapi.json"
//! openapi_version = "3.0.0"
//!
//! [info]
//! name = "Pets"
//! description = "Pet store API"
//! version = "1.0.0"
//!
//! [[servers]]
//! url = "https://api.example.com/{version}"
//!
//! [servers.variables.version]
//! default = "v1"
//! enum = ["v1", "v2"]
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Scalar values can be overridden via environment variables using the
//! format `PREFIX__SECTION__KEY`. For example:
//!
//! - `PERIPLUS__OUT_FILE=dist/openapi.json`
//! - `PERIPLUS__INFO__VERSION=2.0.0`
//! - `PERIPLUS__LOGGING__FORMAT=pretty`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;
mod validation;

pub use config::*;
pub use error::{ConfigError, PropertyError};
pub use loader::ConfigLoader;
pub use schema::*;
pub use validation::{validate_server_entry, validate_servers, validate_url};
