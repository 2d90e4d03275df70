//! Route path canonicalization.
//!
//! Canonical form: starts with `/`, and never ends with `/` unless the
//! whole path is the root `/`. Nothing else is normalised; interior
//! double slashes and `{param}` templates pass through as written.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical route path.
///
/// # Example
///
/// ```rust
/// use periplus_shards::RoutePath;
///
/// assert_eq!(RoutePath::new("users/").as_str(), "/users");
/// assert_eq!(RoutePath::new("").as_str(), "/");
/// assert!(RoutePath::new("/").is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// Canonicalize a raw path.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(canonicalize(raw))
    }

    /// Returns the canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the path, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if this is the root path `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Appends another canonical path verbatim.
    ///
    /// The result is not re-canonicalized, so a root base yields `//child`.
    pub(crate) fn join_verbatim(&self, child: &RoutePath) -> String {
        let mut joined = String::with_capacity(self.0.len() + child.0.len());
        joined.push_str(&self.0);
        joined.push_str(&child.0);
        joined
    }
}

/// Normalize a raw path into canonical form.
///
/// - A leading `/` is added when missing
/// - Trailing `/` characters are removed while the path is longer than one character
///
/// Any string is accepted; the operation is idempotent.
///
/// # Example
///
/// ```rust
/// use periplus_shards::canonicalize;
///
/// assert_eq!(canonicalize("/home/"), "/home");
/// assert_eq!(canonicalize("home"), "/home");
/// assert_eq!(canonicalize("/"), "/");
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    let mut path = String::with_capacity(raw.len() + 1);
    if !raw.starts_with('/') {
        path.push('/');
    }
    path.push_str(raw);

    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RoutePath {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
