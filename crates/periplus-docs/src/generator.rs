//! Builds the initial document from a validated configuration.

use indexmap::IndexMap;
use periplus_config::{self as config, PeriplusConfig};

use crate::openapi::{Contact, Info, OpenApi, Server, ServerVariable};

/// Generator for the document skeleton (root, info, servers).
///
/// Paths are added afterwards with [`OpenApi::add_operation`].
///
/// # Example
///
/// ```
/// use periplus_config::{ApiInfo, PeriplusConfig, ServerDescriptor};
/// use periplus_docs::DocumentGenerator;
///
/// let config = PeriplusConfig::builder()
///     .info(ApiInfo::new("Pets", "Pet store", "1.0.0"))
///     .server(ServerDescriptor::new("http://localhost"))
///     .build();
///
/// let doc = DocumentGenerator::from_config(&config).generate();
/// assert_eq!(doc.info.title, "Pets");
/// assert_eq!(doc.servers[0].url, "http://localhost");
/// assert!(doc.paths.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    openapi_version: String,
    info: Info,
    servers: Vec<Server>,
}

impl DocumentGenerator {
    /// Create a generator from configuration.
    #[must_use]
    pub fn from_config(config: &PeriplusConfig) -> Self {
        Self {
            openapi_version: config.openapi_version.clone(),
            info: Info::from(&config.info),
            servers: config.servers.iter().map(Server::from).collect(),
        }
    }

    /// Override the OpenAPI version.
    #[must_use]
    pub fn openapi_version(mut self, version: impl Into<String>) -> Self {
        self.openapi_version = version.into();
        self
    }

    /// Append a server.
    #[must_use]
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Produce a document with no paths.
    #[must_use]
    pub fn generate(&self) -> OpenApi {
        tracing::debug!(
            title = %self.info.title,
            openapi = %self.openapi_version,
            servers = self.servers.len(),
            "Generating document"
        );

        OpenApi {
            openapi: self.openapi_version.clone(),
            info: self.info.clone(),
            servers: self.servers.clone(),
            paths: IndexMap::new(),
        }
    }
}

impl From<&config::ApiInfo> for Info {
    fn from(info: &config::ApiInfo) -> Self {
        Self {
            title: info.name.clone(),
            description: Some(info.description.clone()).filter(|d| !d.is_empty()),
            version: info.version.clone(),
            contact: info.contact.as_ref().map(Contact::from),
            terms_of_service: info.terms_of_service.clone(),
        }
    }
}

impl From<&config::Contact> for Contact {
    fn from(contact: &config::Contact) -> Self {
        Self {
            name: contact.name.clone(),
            url: contact.url.clone(),
            email: contact.email.clone(),
        }
    }
}

impl From<&config::ServerDescriptor> for Server {
    fn from(server: &config::ServerDescriptor) -> Self {
        Self {
            url: server.url.clone(),
            description: server.description.clone(),
            variables: server
                .variables
                .iter()
                .map(|(name, variable)| (name.clone(), ServerVariable::from(variable)))
                .collect(),
        }
    }
}

impl From<&config::ServerVariable> for ServerVariable {
    fn from(variable: &config::ServerVariable) -> Self {
        Self {
            enum_values: variable.enum_values.clone(),
            default: variable.default.clone(),
            description: variable.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use periplus_config::{ApiInfo, ServerDescriptor};

    fn config() -> PeriplusConfig {
        PeriplusConfig::builder()
            .info(
                ApiInfo::new("Pets", "", "2.1.0").with_contact(config::Contact {
                    name: Some("Ops".to_string()),
                    email: None,
                    url: None,
                }),
            )
            .server(ServerDescriptor::new("http://localhost:8080").with_description("local"))
            .server(
                ServerDescriptor::new("https://{region}.example.com")
                    .with_variable(
                        "region",
                        config::ServerVariable::new("eu").with_enum(["eu", "us"]),
                    )
                    .with_variable("port", config::ServerVariable::new("443")),
            )
            .build()
    }

    #[test]
    fn test_info_mapping() {
        let doc = DocumentGenerator::from_config(&config()).generate();
        assert_eq!(doc.openapi, "3.0.0");
        assert_eq!(doc.info.title, "Pets");
        assert_eq!(doc.info.version, "2.1.0");
        assert!(doc.info.description.is_none());
        assert_eq!(doc.info.contact.unwrap().name.as_deref(), Some("Ops"));
    }

    #[test]
    fn test_servers_keep_order() {
        let doc = DocumentGenerator::from_config(&config()).generate();
        assert_eq!(doc.servers.len(), 2);
        assert_eq!(doc.servers[0].description.as_deref(), Some("local"));

        let names: Vec<&str> = doc.servers[1].variables.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["region", "port"]);
        assert_eq!(
            doc.servers[1].variables["region"].enum_values,
            Some(vec!["eu".to_string(), "us".to_string()])
        );
    }

    #[test]
    fn test_generator_overrides() {
        let doc = DocumentGenerator::from_config(&config())
            .openapi_version("3.1.0")
            .server(Server {
                url: "https://staging.example.com".to_string(),
                description: None,
                variables: IndexMap::new(),
            })
            .generate();

        assert_eq!(doc.openapi, "3.1.0");
        assert_eq!(doc.servers.len(), 3);
    }
}
