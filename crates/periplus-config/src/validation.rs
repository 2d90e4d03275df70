//! Server entry validation.
//!
//! Checks each server descriptor against the OpenAPI server object rules:
//! the URL must be syntactically valid and every variable that declares an
//! `enum` must list its own `default`. Validation never touches shard state.

use indexmap::IndexMap;
use url::Url;

use crate::error::ConfigError;
use crate::schema::{ServerDescriptor, ServerVariable};

const INVALID_URL_REASON: &str = "Invalid URL Provided!";
const ENUM_DEFAULT_REASON: &str = "Default value was not found within enum!";

/// Validate a single server URL and its variables.
///
/// Errors name the offending property relative to `server`, e.g.
/// `server.url` or `server.variables.port`.
///
/// # Errors
///
/// - [`ConfigError::InvalidUrl`] if `url` does not parse as an absolute URL
/// - [`ConfigError::EnumDefaultMismatch`] if a variable's `default` is not in its `enum`
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use periplus_config::{validate_server_entry, ServerVariable};
///
/// let mut variables = IndexMap::new();
/// variables.insert("version".to_string(), ServerVariable::new("v1").with_enum(["v1", "v2"]));
///
/// assert!(validate_server_entry("https://api.example.com/{version}", &variables).is_ok());
/// assert!(validate_server_entry("not a url", &IndexMap::new()).is_err());
/// ```
pub fn validate_server_entry(
    url: &str,
    variables: &IndexMap<String, ServerVariable>,
) -> Result<(), ConfigError> {
    validate_entry("server", url, variables)
}

/// Validate every server in order, naming properties `servers[i]...`.
///
/// # Errors
///
/// Returns the first failure, see [`validate_server_entry`].
pub fn validate_servers(servers: &[ServerDescriptor]) -> Result<(), ConfigError> {
    for (index, server) in servers.iter().enumerate() {
        validate_entry(&format!("servers[{index}]"), &server.url, &server.variables)?;
    }
    Ok(())
}

/// Validate URL syntax.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] naming `property_name` on failure.
pub fn validate_url(url: &str, property_name: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|_| ConfigError::invalid_url(property_name, url, INVALID_URL_REASON))
}

fn validate_entry(
    prefix: &str,
    url: &str,
    variables: &IndexMap<String, ServerVariable>,
) -> Result<(), ConfigError> {
    validate_url(url, &format!("{prefix}.url"))?;

    for (name, variable) in variables {
        if let Some(allowed) = &variable.enum_values {
            if !allowed.contains(&variable.default) {
                return Err(ConfigError::enum_default_mismatch(
                    format!("{prefix}.variables.{name}"),
                    variable.default.clone(),
                    ENUM_DEFAULT_REASON,
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables(entries: &[(&str, ServerVariable)]) -> IndexMap<String, ServerVariable> {
        entries
            .iter()
            .map(|(name, variable)| ((*name).to_string(), variable.clone()))
            .collect()
    }

    #[test]
    fn test_valid_urls() {
        for url in [
            "http://localhost",
            "http://localhost:8080/api",
            "https://api.example.com/v1",
            "https://api.example.com/{basePath}",
        ] {
            assert!(validate_url(url, "server.url").is_ok(), "{url}");
        }
    }

    #[test]
    fn test_invalid_urls() {
        for url in ["not a url", "", "/relative/path", "http://", "://missing-scheme"] {
            let err = validate_url(url, "server.url").unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl(_)), "{url}");
        }
    }

    #[test]
    fn test_invalid_url_payload() {
        let err = validate_server_entry("not a url", &IndexMap::new()).unwrap_err();
        let property = err.property().unwrap();
        assert_eq!(property.property_name, "server.url");
        assert_eq!(property.property_value, "not a url");
        assert_eq!(property.reason, INVALID_URL_REASON);
    }

    #[test]
    fn test_default_in_enum() {
        let vars = variables(&[("version", ServerVariable::new("v1").with_enum(["v1", "v2"]))]);
        assert!(validate_server_entry("http://localhost", &vars).is_ok());
    }

    #[test]
    fn test_default_not_in_enum() {
        let vars = variables(&[("version", ServerVariable::new("v1").with_enum(["v2", "v3"]))]);
        let err = validate_server_entry("http://localhost", &vars).unwrap_err();
        let property = err.property().unwrap();
        assert!(matches!(err, ConfigError::EnumDefaultMismatch(_)));
        assert_eq!(property.property_name, "server.variables.version");
        assert_eq!(property.property_value, "v1");
        assert_eq!(property.reason, ENUM_DEFAULT_REASON);
    }

    #[test]
    fn test_empty_enum_rejects_any_default() {
        let empty = ServerVariable::new("v1").with_enum(Vec::<String>::new());
        let vars = variables(&[("version", empty)]);
        let err = validate_server_entry("http://localhost", &vars).unwrap_err();
        assert!(matches!(err, ConfigError::EnumDefaultMismatch(_)));
    }

    #[test]
    fn test_variable_without_enum_accepts_anything() {
        let vars = variables(&[("port", ServerVariable::new("anything at all"))]);
        assert!(validate_server_entry("http://localhost", &vars).is_ok());
    }

    #[test]
    fn test_url_checked_before_variables() {
        let vars = variables(&[("version", ServerVariable::new("v1").with_enum(["v2"]))]);
        let err = validate_server_entry("not a url", &vars).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_validate_servers_reports_index() {
        let servers = vec![
            ServerDescriptor::new("http://localhost"),
            ServerDescriptor::new("https://api.example.com")
                .with_variable("a", ServerVariable::new("x"))
                .with_variable("b", ServerVariable::new("y").with_enum(["z"])),
        ];
        let err = validate_servers(&servers).unwrap_err();
        assert_eq!(err.property().unwrap().property_name, "servers[1].variables.b");
    }

    #[test]
    fn test_validate_servers_first_failure_wins() {
        let servers = vec![
            ServerDescriptor::new("bogus"),
            ServerDescriptor::new("also bogus"),
        ];
        let err = validate_servers(&servers).unwrap_err();
        assert_eq!(err.property().unwrap().property_name, "servers[0].url");
    }

    #[test]
    fn test_validate_servers_empty() {
        assert!(validate_servers(&[]).is_ok());
    }
}
