//! Shard composition.
//!
//! Folds an ordered sequence of shards into a single path and fingerprint.
//! Composition reads the table but never writes to it: the fingerprint of a
//! composed path is only resolvable after that path has been registered with
//! [`ShardTable::create_shard`].

use crate::error::ShardResult;
use crate::fingerprint::{fingerprint, Fingerprint};
use crate::table::ShardTable;

impl ShardTable {
    /// Concatenates the paths of several shards, in order.
    ///
    /// Paths are joined verbatim, without re-canonicalizing the result.
    /// An empty sequence composes to the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ShardError::UnknownShard`](crate::ShardError::UnknownShard)
    /// for the first fingerprint that is not registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use periplus_shards::ShardTable;
    ///
    /// let mut table = ShardTable::new();
    /// let (_, api) = table.create_shard("/api");
    /// let (_, users) = table.create_shard("users/");
    ///
    /// assert_eq!(table.compose_path(&[api, users]).unwrap(), "/api/users");
    /// ```
    pub fn compose_path(&self, shards: &[Fingerprint]) -> ShardResult<String> {
        let mut composed = String::new();
        for shard in shards {
            composed.push_str(self.resolve(shard)?.as_str());
        }
        Ok(composed)
    }

    /// Combines several shards into a new fingerprint.
    ///
    /// The result is the fingerprint of [`compose_path`](Self::compose_path).
    /// It is deterministic and order-sensitive. The composed path is **not**
    /// registered, so the returned fingerprint does not resolve until the
    /// same path is passed to [`create_shard`](Self::create_shard).
    ///
    /// # Errors
    ///
    /// Returns [`ShardError::UnknownShard`](crate::ShardError::UnknownShard)
    /// for the first fingerprint that is not registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use periplus_shards::ShardTable;
    ///
    /// let mut table = ShardTable::new();
    /// let (_, home) = table.create_shard("/home");
    /// let (_, admin) = table.create_shard("/admin");
    ///
    /// let combined = table.combine_shards(&[home.clone(), admin.clone()]).unwrap();
    /// assert_eq!(combined, table.combine_shards(&[home, admin]).unwrap());
    /// assert!(table.resolve(&combined).is_err());
    /// ```
    pub fn combine_shards(&self, shards: &[Fingerprint]) -> ShardResult<Fingerprint> {
        let composed = self.compose_path(shards)?;
        let combined = fingerprint(&composed);
        tracing::trace!(
            shards = shards.len(),
            path = %composed,
            combined = combined.short(),
            "Combined route shards"
        );
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ShardError;
    use crate::fingerprint::fingerprint;
    use crate::table::ShardTable;

    #[test]
    fn test_compose_path_concatenates_in_order() {
        let mut table = ShardTable::new();
        let (_, home) = table.create_shard("/home");
        let (_, admin) = table.create_shard("/admin");

        assert_eq!(
            table.compose_path(&[home.clone(), admin.clone()]).unwrap(),
            "/home/admin"
        );
        assert_eq!(table.compose_path(&[admin, home]).unwrap(), "/admin/home");
    }

    #[test]
    fn test_combine_is_deterministic() {
        let mut table = ShardTable::new();
        let (_, h1) = table.create_shard("/home");
        let (_, h2) = table.create_shard("/admin");

        let first = table.combine_shards(&[h1.clone(), h2.clone()]).unwrap();
        let second = table.combine_shards(&[h1.clone(), h2]).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, h1);
        assert_ne!(first, fingerprint("/home"));
        assert_eq!(first, fingerprint("/home/admin"));
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let mut table = ShardTable::new();
        let (_, a) = table.create_shard("/a");
        let (_, b) = table.create_shard("/b");

        let ab = table.combine_shards(&[a.clone(), b.clone()]).unwrap();
        let ba = table.combine_shards(&[b, a]).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_combine_single_shard_matches_its_fingerprint() {
        let mut table = ShardTable::new();
        let (_, home) = table.create_shard("/home");
        assert_eq!(table.combine_shards(std::slice::from_ref(&home)).unwrap(), home);
    }

    #[test]
    fn test_combine_empty() {
        let table = ShardTable::new();
        assert_eq!(table.compose_path(&[]).unwrap(), "");
        assert_eq!(table.combine_shards(&[]).unwrap(), fingerprint(""));
    }

    #[test]
    fn test_combine_does_not_register() {
        let mut table = ShardTable::new();
        let (_, h1) = table.create_shard("/home");
        let (_, h2) = table.create_shard("/admin");

        let combined = table.combine_shards(&[h1, h2]).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.contains(&combined));

        let (_, registered) = table.create_shard("/home/admin");
        assert_eq!(registered, combined);
        assert!(table.resolve(&combined).is_ok());
    }

    #[test]
    fn test_combine_fails_on_first_unknown() {
        let mut table = ShardTable::new();
        let (_, known) = table.create_shard("/known");
        let missing_one = fingerprint("/missing-one");
        let missing_two = fingerprint("/missing-two");

        let err = table
            .combine_shards(&[known, missing_one.clone(), missing_two])
            .unwrap_err();
        assert_eq!(err, ShardError::unknown_shard(missing_one.as_str()));
    }

    #[test]
    fn test_combine_after_delete_fails() {
        let mut table = ShardTable::new();
        let (_, home) = table.create_shard("/home");
        let (_, admin) = table.create_shard("/admin");
        table.delete_shard(&admin);

        let err = table.combine_shards(&[home, admin.clone()]).unwrap_err();
        assert_eq!(err.fingerprint(), Some(admin.as_str()));
    }
}
