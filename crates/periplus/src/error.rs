//! Top-level error type.

use periplus_config::ConfigError;
use periplus_docs::DocsError;
use periplus_shards::ShardError;
use periplus_telemetry::TelemetryError;
use thiserror::Error;

/// Any failure surfaced by [`Periplus`](crate::Periplus).
#[derive(Debug, Error)]
pub enum PeriplusError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A shard lookup failed.
    #[error(transparent)]
    Shard(#[from] ShardError),

    /// The document could not be rendered or written.
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// Logging could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

/// Result type for facade operations.
pub type PeriplusResult<T> = Result<T, PeriplusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_error_is_transparent() {
        let err: PeriplusError = ShardError::unknown_shard("abc").into();
        assert_eq!(err.to_string(), "failed to resolve route shard abc");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: PeriplusError = ConfigError::missing_field("info.name").into();
        assert!(matches!(err, PeriplusError::Config(_)));
        assert!(err.to_string().contains("info.name"));
    }
}
