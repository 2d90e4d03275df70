//! Configuration error types.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Structured description of a rejected configuration property.
///
/// Carried unchanged by [`ConfigError::InvalidUrl`] and
/// [`ConfigError::EnumDefaultMismatch`] so callers can assert on the
/// exact property that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyError {
    /// Path of the property, e.g. `servers[0].variables.version`.
    pub property_name: String,
    /// The value that was rejected.
    pub property_value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl PropertyError {
    /// Create a new property error.
    pub fn new(
        property_name: impl Into<String>,
        property_value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            property_value: property_value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "property {} received an incorrect value '{}': {}",
            self.property_name, self.property_value, self.reason
        )
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A server URL failed URL syntax validation.
    #[error("invalid URL: {0}")]
    InvalidUrl(PropertyError),

    /// A server variable's default is not one of its enum values.
    #[error("server variable default not in enum: {0}")]
    EnumDefaultMismatch(PropertyError),

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Missing or empty required field.
    #[error("missing required configuration field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Environment variable parsing error.
    #[error("failed to parse environment variable {var}: {reason}")]
    EnvParseError {
        /// The environment variable name.
        var: String,
        /// Explanation of the parsing error.
        reason: String,
    },

    /// Validation error after loading.
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Create a new invalid URL error.
    pub fn invalid_url(
        property_name: impl Into<String>,
        url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidUrl(PropertyError::new(property_name, url, reason))
    }

    /// Create a new enum/default mismatch error.
    pub fn enum_default_mismatch(
        property_name: impl Into<String>,
        default: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::EnumDefaultMismatch(PropertyError::new(property_name, default, reason))
    }

    /// Create a new file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new environment variable parse error.
    pub fn env_parse_error(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EnvParseError {
            var: var.into(),
            reason: reason.into(),
        }
    }

    /// Create a new validation error.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Returns the structured payload of a property validation failure.
    #[must_use]
    pub fn property(&self) -> Option<&PropertyError> {
        match self {
            Self::InvalidUrl(property) | Self::EnumDefaultMismatch(property) => Some(property),
            _ => None,
        }
    }
}
