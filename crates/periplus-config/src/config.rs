//! Main configuration types.
//!
//! This module provides the top-level [`PeriplusConfig`] struct and its builder.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::validation::validate_servers;
use crate::{ApiInfo, ConfigError, LoggingConfig, ServerDescriptor};

/// Default output file for the rendered document.
pub const DEFAULT_OUT_FILE: &str = "openapi.json";

/// Default OpenAPI version written to the document.
pub const DEFAULT_OPENAPI_VERSION: &str = "3.0.0";

/// Complete configuration for one described API.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from files
/// and environment variables, or [`PeriplusConfig::builder`] to build it in code.
///
/// # Example
///
/// ```
/// use periplus_config::{ApiInfo, PeriplusConfig, ServerDescriptor};
///
/// let config = PeriplusConfig::builder()
///     .info(ApiInfo::new("Pets", "Pet store", "1.0.0"))
///     .server(ServerDescriptor::new("http://localhost"))
///     .build_validated()
///     .unwrap();
///
/// assert_eq!(config.out_file.to_str(), Some("openapi.json"));
/// assert_eq!(config.openapi_version, "3.0.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PeriplusConfig {
    /// Where the rendered document is written.
    #[serde(default = "default_out_file")]
    pub out_file: PathBuf,

    /// OpenAPI version string placed in the document root.
    #[serde(default = "default_openapi_version")]
    pub openapi_version: String,

    /// API metadata.
    #[serde(default)]
    pub info: ApiInfo,

    /// Servers, in declaration order.
    #[serde(default)]
    pub servers: Vec<ServerDescriptor>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for PeriplusConfig {
    fn default() -> Self {
        Self {
            out_file: default_out_file(),
            openapi_version: default_openapi_version(),
            info: ApiInfo::default(),
            servers: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_out_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_FILE)
}

fn default_openapi_version() -> String {
    DEFAULT_OPENAPI_VERSION.to_string()
}

impl PeriplusConfig {
    /// Create a configuration with default output settings and no servers.
    #[must_use]
    pub fn new(info: ApiInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> PeriplusConfigBuilder {
        PeriplusConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingField`] if `info.name`, `info.version` or
    ///   `openapi_version` is empty
    /// - [`ConfigError::InvalidUrl`] or [`ConfigError::EnumDefaultMismatch`]
    ///   for the first invalid server, in declaration order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.info.name.trim().is_empty() {
            return Err(ConfigError::missing_field("info.name"));
        }
        if self.info.version.trim().is_empty() {
            return Err(ConfigError::missing_field("info.version"));
        }
        if self.openapi_version.trim().is_empty() {
            return Err(ConfigError::missing_field("openapi_version"));
        }

        validate_servers(&self.servers)?;

        tracing::debug!(
            api = %self.info.name,
            servers = self.servers.len(),
            "Configuration validated"
        );
        Ok(())
    }
}

/// Builder for [`PeriplusConfig`].
#[derive(Debug, Default)]
pub struct PeriplusConfigBuilder {
    out_file: Option<PathBuf>,
    openapi_version: Option<String>,
    info: Option<ApiInfo>,
    servers: Vec<ServerDescriptor>,
    logging: Option<LoggingConfig>,
}

impl PeriplusConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file.
    #[must_use]
    pub fn out_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_file = Some(path.into());
        self
    }

    /// Set the OpenAPI version.
    #[must_use]
    pub fn openapi_version(mut self, version: impl Into<String>) -> Self {
        self.openapi_version = Some(version.into());
        self
    }

    /// Set the API metadata.
    #[must_use]
    pub fn info(mut self, info: ApiInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Append a server.
    #[must_use]
    pub fn server(mut self, server: ServerDescriptor) -> Self {
        self.servers.push(server);
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Build the configuration.
    ///
    /// Any unset sections will use their default values.
    #[must_use]
    pub fn build(self) -> PeriplusConfig {
        PeriplusConfig {
            out_file: self.out_file.unwrap_or_else(default_out_file),
            openapi_version: self.openapi_version.unwrap_or_else(default_openapi_version),
            info: self.info.unwrap_or_default(),
            servers: self.servers,
            logging: self.logging.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<PeriplusConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
