//! Store label type for identifying cache stores.
//!
//! `StoreLabel` is a newtype wrapper around `SmolStr` that provides type
//! safety for store identifiers used in registry lookup and tracing.

use smol_str::SmolStr;
use std::fmt;

/// A label identifying a cache store.
///
/// Used for:
/// - Symbolic names in the store registry
/// - Store identification in `Store::label()`
/// - Tracing output when the dispatcher walks its store list
///
/// # Example
/// ```
/// use cascade_core::StoreLabel;
///
/// let label = StoreLabel::new("memory");
/// assert_eq!(label.as_str(), "memory");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StoreLabel(SmolStr);

impl StoreLabel {
    /// Creates a new store label.
    #[inline]
    pub fn new(s: impl Into<SmolStr>) -> Self {
        Self(s.into())
    }

    /// Creates a store label from a static string (no allocation).
    #[inline]
    pub const fn new_static(s: &'static str) -> Self {
        Self(SmolStr::new_static(s))
    }

    /// Returns the label as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a reference to the inner `SmolStr`.
    #[inline]
    pub fn as_smol_str(&self) -> &SmolStr {
        &self.0
    }
}

impl fmt::Display for StoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for StoreLabel {
    #[inline]
    fn from(s: &str) -> Self {
        Self(SmolStr::new(s))
    }
}

impl From<String> for StoreLabel {
    #[inline]
    fn from(s: String) -> Self {
        Self(SmolStr::from(s))
    }
}

impl From<SmolStr> for StoreLabel {
    #[inline]
    fn from(s: SmolStr) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StoreLabel {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}
