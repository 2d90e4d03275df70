//! The shard table.
//!
//! This module provides [`ShardTable`], the mapping from [`Fingerprint`] to
//! canonical [`RoutePath`] that backs every shard operation.

use indexmap::IndexMap;

use crate::error::{ShardError, ShardResult};
use crate::fingerprint::Fingerprint;
use crate::path::RoutePath;

/// Mapping from shard fingerprints to canonical route paths.
///
/// Every key in the table was computed by hashing the exact path it maps to.
/// Entries are only added by [`create_shard`](Self::create_shard) and only
/// removed by [`delete_shard`](Self::delete_shard); there is no expiry.
/// Iteration yields shards in registration order.
///
/// # Example
///
/// ```rust
/// use periplus_shards::ShardTable;
///
/// let mut table = ShardTable::new();
/// let (path, shard) = table.create_shard("users/");
///
/// assert_eq!(path.as_str(), "/users");
/// assert_eq!(table.resolve(&shard).unwrap(), &path);
/// assert_eq!(table.create_shard("/users"), (path, shard));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShardTable {
    shards: IndexMap<Fingerprint, RoutePath>,
}

impl ShardTable {
    /// Creates a new empty shard table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route path and returns its canonical form and shard.
    ///
    /// Registering a path that is already present returns the existing
    /// pair; entries are never overwritten.
    pub fn create_shard(&mut self, raw: &str) -> (RoutePath, Fingerprint) {
        let path = RoutePath::new(raw);
        let shard = Fingerprint::of(&path);

        if let Some(existing) = self.shards.get(&shard) {
            tracing::trace!(shard = shard.short(), path = %existing, "Shard already registered");
            return (existing.clone(), shard);
        }

        tracing::debug!(shard = shard.short(), path = %path, "Registered route shard");
        self.shards.insert(shard.clone(), path.clone());
        (path, shard)
    }

    /// Resolves a shard to its route path.
    ///
    /// # Errors
    ///
    /// Returns [`ShardError::UnknownShard`] if the fingerprint is not registered.
    pub fn resolve(&self, shard: &Fingerprint) -> ShardResult<&RoutePath> {
        self.shards
            .get(shard)
            .ok_or_else(|| ShardError::unknown_shard(shard.as_str()))
    }

    /// Builds a nested route below a registered shard.
    ///
    /// The child is canonicalized and appended to the shard's path as-is;
    /// the concatenation itself is not canonicalized again and is not
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns [`ShardError::UnknownShard`] if the fingerprint is not registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use periplus_shards::ShardTable;
    ///
    /// let mut table = ShardTable::new();
    /// let (_, home) = table.create_shard("/home/");
    ///
    /// assert_eq!(table.route_with_shard(&home, "/posts").unwrap(), "/home/posts");
    /// ```
    pub fn route_with_shard(&self, shard: &Fingerprint, raw: &str) -> ShardResult<String> {
        let base = self.resolve(shard)?;
        Ok(base.join_verbatim(&RoutePath::new(raw)))
    }

    /// Removes a shard.
    ///
    /// Returns `true` if an entry was removed and `false` if the shard was
    /// already absent. Repeated deletion is always safe.
    pub fn delete_shard(&mut self, shard: &Fingerprint) -> bool {
        match self.shards.shift_remove(shard) {
            Some(path) => {
                tracing::debug!(shard = shard.short(), path = %path, "Deleted route shard");
                true
            }
            None => false,
        }
    }

    /// Returns true if the shard is registered.
    #[must_use]
    pub fn contains(&self, shard: &Fingerprint) -> bool {
        self.shards.contains_key(shard)
    }

    /// Returns the number of registered shards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shards.len()
    }

    /// Returns true if no shards are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    /// Iterates over `(shard, path)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &RoutePath)> {
        self.shards.iter()
    }

    /// Iterates over registered paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &RoutePath> {
        self.shards.values()
    }
}
