//! Shard error types.

use thiserror::Error;

/// Errors that can occur during shard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShardError {
    /// The fingerprint is not present in the shard table.
    #[error("failed to resolve route shard {fingerprint}")]
    UnknownShard {
        /// The fingerprint that could not be resolved.
        fingerprint: String,
    },

    /// The string is not a well-formed fingerprint.
    #[error("malformed shard fingerprint '{value}': {reason}")]
    MalformedFingerprint {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ShardError {
    /// Create a new unknown shard error.
    pub fn unknown_shard(fingerprint: impl Into<String>) -> Self {
        Self::UnknownShard {
            fingerprint: fingerprint.into(),
        }
    }

    /// Create a new malformed fingerprint error.
    pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFingerprint {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending fingerprint for [`ShardError::UnknownShard`].
    #[must_use]
    pub fn fingerprint(&self) -> Option<&str> {
        match self {
            Self::UnknownShard { fingerprint } => Some(fingerprint),
            Self::MalformedFingerprint { .. } => None,
        }
    }
}

/// Result type for shard operations.
pub type ShardResult<T> = Result<T, ShardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shard_error() {
        let err = ShardError::unknown_shard("deadbeef");
        assert_eq!(err.to_string(), "failed to resolve route shard deadbeef");
        assert_eq!(err.fingerprint(), Some("deadbeef"));
    }

    #[test]
    fn test_malformed_fingerprint_error() {
        let err = ShardError::malformed("xyz", "expected 64 hex characters");
        assert!(err.to_string().contains("xyz"));
        assert!(err.to_string().contains("64 hex"));
        assert_eq!(err.fingerprint(), None);
    }
}
