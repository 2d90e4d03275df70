//! The [`Periplus`] document builder.

use std::path::Path;

use periplus_config::{ConfigLoader, PeriplusConfig};
use periplus_docs::{DocumentGenerator, HttpMethod, OpenApi, Operation};
use periplus_shards::{Fingerprint, RoutePath, ShardTable};
use periplus_telemetry::LogConfig;

use crate::error::PeriplusResult;

/// A validated API description with its route shards and document.
///
/// Construction validates the configuration; an invalid configuration
/// never yields a `Periplus`. Shard operations delegate to the owned
/// [`ShardTable`], and operations are recorded into the owned [`OpenApi`]
/// document under shard-resolved paths.
///
/// # Example
///
/// ```rust
/// use periplus::prelude::*;
///
/// # fn main() -> Result<(), PeriplusError> {
/// let config = PeriplusConfig::builder()
///     .info(ApiInfo::new("Blog", "Blog API", "1.0.0"))
///     .server(ServerDescriptor::new("http://localhost"))
///     .build();
///
/// let mut api = Periplus::new(config)?;
/// let (_, home) = api.create_shard("/home/");
///
/// api.register_route_operation(&home, "posts", HttpMethod::Get, Operation::new())?;
/// assert!(api.document().paths.contains_key("/home/posts"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Periplus {
    config: PeriplusConfig,
    shards: ShardTable,
    document: OpenApi,
}

impl Periplus {
    /// Validate `config` and build an empty document from it.
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Config`](crate::PeriplusError::Config) if validation fails.
    pub fn new(config: PeriplusConfig) -> PeriplusResult<Self> {
        config.validate()?;

        let document = DocumentGenerator::from_config(&config).generate();
        tracing::info!(
            api = %config.info.name,
            servers = config.servers.len(),
            "Initialized document builder"
        );

        Ok(Self {
            config,
            shards: ShardTable::new(),
            document,
        })
    }

    /// Load configuration through `loader` and build from it.
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Config`](crate::PeriplusError::Config) if
    /// loading or validation fails.
    pub fn from_loader(loader: ConfigLoader) -> PeriplusResult<Self> {
        Self::new(loader.load()?)
    }

    /// Install the global log subscriber described by the `logging` section.
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Telemetry`](crate::PeriplusError::Telemetry)
    /// if the level is invalid or a subscriber is already installed.
    pub fn init_logging(&self) -> PeriplusResult<()> {
        periplus_telemetry::init_logging(&LogConfig::from(&self.config.logging))?;
        Ok(())
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &PeriplusConfig {
        &self.config
    }

    /// Read access to the registered shards.
    #[must_use]
    pub fn shards(&self) -> &ShardTable {
        &self.shards
    }

    /// The document built so far.
    #[must_use]
    pub fn document(&self) -> &OpenApi {
        &self.document
    }

    /// See [`ShardTable::create_shard`].
    pub fn create_shard(&mut self, raw: &str) -> (RoutePath, Fingerprint) {
        self.shards.create_shard(raw)
    }

    /// See [`ShardTable::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Shard`](crate::PeriplusError::Shard) for unknown shards.
    pub fn resolve(&self, shard: &Fingerprint) -> PeriplusResult<&RoutePath> {
        Ok(self.shards.resolve(shard)?)
    }

    /// See [`ShardTable::route_with_shard`].
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Shard`](crate::PeriplusError::Shard) for unknown shards.
    pub fn route_with_shard(&self, shard: &Fingerprint, raw: &str) -> PeriplusResult<String> {
        Ok(self.shards.route_with_shard(shard, raw)?)
    }

    /// See [`ShardTable::combine_shards`].
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Shard`](crate::PeriplusError::Shard) for the
    /// first unknown shard.
    pub fn combine_shards(&self, shards: &[Fingerprint]) -> PeriplusResult<Fingerprint> {
        Ok(self.shards.combine_shards(shards)?)
    }

    /// See [`ShardTable::compose_path`].
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Shard`](crate::PeriplusError::Shard) for the
    /// first unknown shard.
    pub fn compose_path(&self, shards: &[Fingerprint]) -> PeriplusResult<String> {
        Ok(self.shards.compose_path(shards)?)
    }

    /// See [`ShardTable::delete_shard`].
    ///
    /// Operations already recorded under the shard's path stay in the document.
    pub fn delete_shard(&mut self, shard: &Fingerprint) -> bool {
        self.shards.delete_shard(shard)
    }

    /// Record `operation` under the path `shard` resolves to.
    ///
    /// Returns the operation it replaced, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Shard`](crate::PeriplusError::Shard) for
    /// unknown shards; the document is left unchanged.
    pub fn register_operation(
        &mut self,
        shard: &Fingerprint,
        method: HttpMethod,
        operation: Operation,
    ) -> PeriplusResult<Option<Operation>> {
        let path = self.shards.resolve(shard)?.as_str().to_owned();
        Ok(self.document.add_operation(path, method, operation))
    }

    /// Record `operation` under `child` nested below `shard`.
    ///
    /// The path is built with [`ShardTable::route_with_shard`].
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Shard`](crate::PeriplusError::Shard) for
    /// unknown shards; the document is left unchanged.
    pub fn register_route_operation(
        &mut self,
        shard: &Fingerprint,
        child: &str,
        method: HttpMethod,
        operation: Operation,
    ) -> PeriplusResult<Option<Operation>> {
        let path = self.shards.route_with_shard(shard, child)?;
        Ok(self.document.add_operation(path, method, operation))
    }

    /// Render the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Docs`](crate::PeriplusError::Docs) if serialization fails.
    pub fn to_json(&self) -> PeriplusResult<String> {
        Ok(self.document.to_json()?)
    }

    /// Write the document to the configured `out_file`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Docs`](crate::PeriplusError::Docs) on
    /// serialization or IO failure.
    pub fn write_document(&self) -> PeriplusResult<()> {
        self.write_document_to(&self.config.out_file)
    }

    /// Write the document to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`PeriplusError::Docs`](crate::PeriplusError::Docs) on
    /// serialization or IO failure.
    pub fn write_document_to(&self, path: impl AsRef<Path>) -> PeriplusResult<()> {
        self.document.write_to_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PeriplusError;
    use periplus_config::{ApiInfo, ConfigError, ServerDescriptor, ServerVariable};

    fn config() -> PeriplusConfig {
        PeriplusConfig::builder()
            .info(ApiInfo::new("Blog", "Blog API", "1.0.0"))
            .server(ServerDescriptor::new("http://localhost"))
            .build()
    }

    #[test]
    fn test_new_builds_empty_document() {
        let api = Periplus::new(config()).unwrap();
        assert_eq!(api.document().info.title, "Blog");
        assert_eq!(api.document().servers.len(), 1);
        assert!(api.document().paths.is_empty());
        assert!(api.shards().is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = PeriplusConfig::builder()
            .info(ApiInfo::new("Blog", "Blog API", "1.0.0"))
            .server(ServerDescriptor::new("not a url"))
            .build();

        let err = Periplus::new(config).unwrap_err();
        assert!(matches!(err, PeriplusError::Config(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_new_rejects_enum_mismatch() {
        let config = PeriplusConfig::builder()
            .info(ApiInfo::new("Blog", "Blog API", "1.0.0"))
            .server(
                ServerDescriptor::new("http://localhost")
                    .with_variable("version", ServerVariable::new("v1").with_enum(["v2", "v3"])),
            )
            .build();

        let err = Periplus::new(config).unwrap_err();
        assert!(matches!(
            err,
            PeriplusError::Config(ConfigError::EnumDefaultMismatch(_))
        ));
    }

    #[test]
    fn test_register_operation_on_shard_path() {
        let mut api = Periplus::new(config()).unwrap();
        let (_, home) = api.create_shard("home/");

        let replaced = api
            .register_operation(&home, HttpMethod::Get, Operation::new().summary("Home"))
            .unwrap();

        assert!(replaced.is_none());
        assert!(api.document().operation("/home", HttpMethod::Get).is_some());
    }

    #[test]
    fn test_register_operation_unknown_shard_leaves_document() {
        let mut api = Periplus::new(config()).unwrap();
        let (_, home) = api.create_shard("/home");
        api.delete_shard(&home);

        let err = api
            .register_operation(&home, HttpMethod::Get, Operation::new())
            .unwrap_err();

        assert!(matches!(err, PeriplusError::Shard(_)));
        assert!(api.document().paths.is_empty());
    }

    #[test]
    fn test_delete_shard_keeps_recorded_operations() {
        let mut api = Periplus::new(config()).unwrap();
        let (_, admin) = api.create_shard("/admin");
        api.register_operation(&admin, HttpMethod::Delete, Operation::new())
            .unwrap();

        assert!(api.delete_shard(&admin));
        assert!(api.document().operation("/admin", HttpMethod::Delete).is_some());
    }

    #[test]
    fn test_to_json_contains_paths() {
        let mut api = Periplus::new(config()).unwrap();
        let (_, home) = api.create_shard("/home");
        api.register_route_operation(
            &home,
            "posts",
            HttpMethod::Post,
            Operation::new().operation_id("createPost"),
        )
        .unwrap();

        let json = api.to_json().unwrap();
        assert!(json.contains("\"/home/posts\""));
        assert!(json.contains("\"operationId\": \"createPost\""));
    }

    #[test]
    fn test_init_logging_disabled_is_noop() {
        let mut config = config();
        config.logging.enabled = false;

        let api = Periplus::new(config).unwrap();
        assert!(api.init_logging().is_ok());
    }
}
