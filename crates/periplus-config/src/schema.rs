//! Configuration schema types.
//!
//! This module defines the structure of every configuration section.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// API metadata.
///
/// # Example
///
/// ```
/// use periplus_config::ApiInfo;
///
/// let info = ApiInfo::new("Pets", "Pet store API", "1.0.0");
/// assert_eq!(info.name, "Pets");
/// assert!(info.contact.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ApiInfo {
    /// API name (rendered as the OpenAPI `info.title`).
    pub name: String,

    /// API description.
    pub description: String,

    /// API version (the API's own version, not the OpenAPI version).
    pub version: String,

    /// Contact information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// Terms of service URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
}

impl ApiInfo {
    /// Create API metadata without contact or terms of service.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            contact: None,
            terms_of_service: None,
        }
    }

    /// Set contact information.
    #[must_use]
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }
}

/// Contact information for the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Contact name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A server the API is reachable at.
///
/// # Example
///
/// ```
/// use periplus_config::{ServerDescriptor, ServerVariable};
///
/// let server = ServerDescriptor::new("https://{region}.example.com")
///     .with_description("Regional endpoint")
///     .with_variable("region", ServerVariable::new("eu").with_enum(["eu", "us"]));
///
/// assert_eq!(server.variables["region"].default, "eu");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerDescriptor {
    /// Server URL, possibly templated with `{variable}` placeholders.
    pub url: String,

    /// Server description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Template variables, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variables: IndexMap<String, ServerVariable>,
}

impl ServerDescriptor {
    /// Create a server with no description or variables.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            variables: IndexMap::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a template variable.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables.insert(name.into(), variable);
        self
    }
}

/// A server URL template variable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerVariable {
    /// Default value. Must be a member of `enum` when `enum` is set.
    pub default: String,

    /// Allowed values.
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServerVariable {
    /// Create a variable with only a default value.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            enum_values: None,
            description: None,
        }
    }

    /// Restrict the variable to a set of values.
    #[must_use]
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level or filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include ANSI color codes in output.
    #[serde(default)]
    pub ansi_enabled: bool,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            ansi_enabled: false,
            include_location: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_serde() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);

        let format: LogFormat = serde_json::from_str(r#""pretty""#).unwrap();
        assert_eq!(format, LogFormat::Pretty);
    }

    #[test]
    fn test_server_variable_enum_renamed() {
        let variable = ServerVariable::new("v1").with_enum(["v1", "v2"]);
        let json = serde_json::to_value(&variable).unwrap();
        assert_eq!(json["enum"], serde_json::json!(["v1", "v2"]));
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_server_variable_without_enum() {
        let variable: ServerVariable = serde_json::from_str(r#"{"default": "8443"}"#).unwrap();
        assert_eq!(variable.default, "8443");
        assert!(variable.enum_values.is_none());
    }

    #[test]
    fn test_server_variables_keep_order() {
        let toml_str = r#"
            url = "https://{host}:{port}/{base}"

            [variables.port]
            default = "443"

            [variables.host]
            default = "api.example.com"

            [variables.base]
            default = "v1"
            enum = ["v1", "v2"]
        "#;

        let server: ServerDescriptor = toml::from_str(toml_str).unwrap();
        let names: Vec<&str> = server.variables.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["port", "host", "base"]);
    }

    #[test]
    fn test_server_unknown_field_rejected() {
        let result: Result<ServerDescriptor, _> =
            serde_json::from_str(r#"{"url": "http://localhost", "host": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_info_with_contact() {
        let info = ApiInfo::new("Test API", "Testing", "1.0.0").with_contact(Contact {
            name: Some("Test User".to_string()),
            email: Some("test@example.org".to_string()),
            url: Some("https://example.org/".to_string()),
        });
        assert_eq!(info.contact.unwrap().email.as_deref(), Some("test@example.org"));
    }
}
