//! Result of a single store operation.
//!
//! Every store operation either produces a real result or declines. The
//! two cases are kept in separate variants so that a store holding a
//! falsy-but-meaningful payload (an empty byte string, a cached `false`)
//! is never confused with a store that has nothing to offer. [`Lookup`]
//! is the only "no result" signal in the crate; errors are a different
//! channel entirely and travel as `Result::Err`.

/// Outcome of asking one store for one operation.
///
/// `Found` carries the operation's result. `Miss` means the store
/// declined: it does not have the key, is not writable, could not
/// delete, and so on. A declined operation is not an error.
///
/// # Example
/// ```
/// use cascade_core::Lookup;
///
/// let hit: Lookup<&str> = Lookup::Found("payload");
/// assert!(hit.is_found());
/// assert_eq!(hit.found(), Some("payload"));
///
/// let miss: Lookup<&str> = Lookup::Miss;
/// assert!(miss.is_miss());
/// assert_eq!(miss.found(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The store produced a result.
    Found(T),
    /// The store declined the operation.
    Miss,
}

impl<T> Lookup<T> {
    /// Returns `true` if the store produced a result.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Returns `true` if the store declined.
    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, Lookup::Miss)
    }

    /// Converts into an `Option`, discarding the miss/found distinction
    /// at the edge of the crate where callers want plain optionals.
    #[inline]
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Miss => None,
        }
    }

    /// Maps the found value, leaving a miss untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::Miss => Lookup::Miss,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    #[inline]
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Lookup::Found(value),
            None => Lookup::Miss,
        }
    }
}

impl<T> From<Lookup<T>> for Option<T> {
    #[inline]
    fn from(lookup: Lookup<T>) -> Self {
        lookup.found()
    }
}
