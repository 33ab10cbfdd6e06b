//! Cache key type.
//!
//! A [`CacheKey`] names a cached entry. The dispatcher treats keys as
//! opaque values and passes them through to each store unchanged; only
//! the stores themselves interpret them.
//!
//! ## Format
//!
//! When rendered to a string, keys follow `{prefix}:{key}`, with the
//! prefix omitted when empty:
//!
//! ```
//! use cascade_core::CacheKey;
//!
//! let key = CacheKey::new("sessions", "user-42");
//! assert_eq!(format!("{}", key), "sessions:user-42");
//!
//! let key = CacheKey::new("", "user-42");
//! assert_eq!(format!("{}", key), "user-42");
//! ```

use smol_str::SmolStr;
use std::fmt;

/// A cache key identifying a cached entry.
///
/// Keys are composed of an optional **prefix** for namespacing (e.g.
/// "sessions", "fragments") and the **key** proper. Both sides use
/// [`SmolStr`], so short keys are stored inline and cloning never
/// allocates for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    prefix: SmolStr,
    key: SmolStr,
}

impl CacheKey {
    /// Creates a new cache key from a prefix and a key string.
    pub fn new(prefix: impl Into<SmolStr>, key: impl Into<SmolStr>) -> Self {
        Self {
            prefix: prefix.into(),
            key: key.into(),
        }
    }

    /// Creates a cache key without a prefix.
    pub fn bare(key: impl Into<SmolStr>) -> Self {
        Self::new("", key)
    }

    /// Returns the namespace prefix. Empty when the key is unprefixed.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the key part.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            f.write_str(&self.key)
        } else {
            write!(f, "{}:{}", self.prefix, self.key)
        }
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self::bare(key)
    }
}
