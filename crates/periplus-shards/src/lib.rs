//! Content-addressed route shards for Periplus.
//!
//! A *shard* is an opaque handle standing in for a registered route path.
//! Callers declare a path fragment once, keep the returned [`Fingerprint`],
//! and later build nested routes from it without repeating string literals.
//! Stale or unknown handles are detected on every lookup.
//!
//! # Features
//!
//! - **Canonical paths**: every path starts with `/` and never ends with `/`
//!   (except the root `/` itself)
//! - **Deterministic handles**: a fingerprint is the SHA-256 of the canonical path
//! - **Deduplication**: registering the same path twice yields the same shard
//! - **Composition**: several shards can be folded into one fingerprint
//!
//! # Example
//!
//! ```rust
//! use periplus_shards::ShardTable;
//!
//! let mut table = ShardTable::new();
//!
//! let (home, home_shard) = table.create_shard("/home/");
//! assert_eq!(home.as_str(), "/home");
//!
//! let posts = table.route_with_shard(&home_shard, "posts").unwrap();
//! assert_eq!(posts.as_str(), "/home/posts");
//!
//! assert!(table.delete_shard(&home_shard));
//! assert!(!table.delete_shard(&home_shard));
//! assert!(table.resolve(&home_shard).is_err());
//! ```
//!
//! # Lifecycle
//!
//! ```text
//!   raw "/home/" ──canonicalize──▶ "/home" ──sha256──▶ 3a5f…e1
//!                                    │                   │
//!                                    └──── ShardTable ◀──┘
//!                                             │
//!            resolve / route_with_shard / combine_shards / delete_shard
//! ```
//!
//! The table performs no internal locking. Share it behind external
//! synchronisation if more than one thread needs it.

mod compose;
mod error;
mod fingerprint;
mod path;
mod table;

pub use error::{ShardError, ShardResult};
pub use fingerprint::{fingerprint, Fingerprint, FINGERPRINT_LEN};
pub use path::{canonicalize, RoutePath};
pub use table::ShardTable;
