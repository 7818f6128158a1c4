//! The normalized set returned by every set-producing operation.
//!
//! [`Set`] is a deduplicated collection that remembers the order in which
//! its elements were first inserted. That order is only observable through
//! iteration; equality and hashing ignore it, so two sets are equal exactly
//! when they hold the same elements.
//!
//! # Hashing
//!
//! The hasher is selected at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxBuildHasher`]
//! - `ahash` feature: [`ahash::RandomState`]
//! - neither: the standard library's SipHash `RandomState`
//!
//! When both features are enabled, `fxhash` takes precedence.
//!
//! # Examples
//!
//! ```rust
//! use setops::Set;
//!
//! let set: Set<i32> = [3, 1, 3, 2].into_iter().collect();
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&1));
//!
//! // Insertion order is kept for iteration
//! let elements: Vec<&i32> = set.iter().collect();
//! assert_eq!(elements, vec![&3, &1, &2]);
//!
//! // ...but not for equality
//! let reordered: Set<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(set, reordered);
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use indexmap::IndexSet;

// =============================================================================
// Hasher selection
// =============================================================================

/// The `BuildHasher` used by [`Set`].
#[cfg(feature = "fxhash")]
pub type SetHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by [`Set`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type SetHasher = ahash::RandomState;

/// The `BuildHasher` used by [`Set`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type SetHasher = std::collections::hash_map::RandomState;

/// Iterator over the elements of a [`Set`] in insertion order.
pub type Iter<'a, A> = indexmap::set::Iter<'a, A>;

/// Owning iterator over the elements of a [`Set`] in insertion order.
pub type IntoIter<A> = indexmap::set::IntoIter<A>;

/// Hashes a single element with a fixed-key hasher.
///
/// Independent of [`SetHasher`] so that equal sets always hash equally,
/// even when the set hasher is randomly seeded per instance.
fn element_hash<A: Hash + ?Sized>(element: &A) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Set Definition
// =============================================================================

/// A deduplicated, insertion-ordered set.
///
/// The public surface is read-only: sets are built with
/// [`FromIterator`] (or the [`set!`](crate::set) macro) and produced by the
/// operations in [`crate::algebra`], which always return a fresh set.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `contains`   | O(1) avg   |
/// | `len`        | O(1)       |
/// | `is_empty`   | O(1)       |
/// | `iter`       | O(n)       |
/// | `collect`    | O(n) avg   |
#[derive(Clone)]
pub struct Set<A> {
    inner: IndexSet<A, SetHasher>,
}

impl<A> Set<A> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexSet::with_hasher(SetHasher::default()),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set: Set<&str> = ["b", "a", "b"].into_iter().collect();
    /// let elements: Vec<&&str> = set.iter().collect();
    /// assert_eq!(elements, vec![&"b", &"a"]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A> {
        self.inner.iter()
    }
}

impl<A: Hash + Eq> Set<A> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: A) -> Self {
        std::iter::once(element).collect()
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set: Set<String> = ["alpha".to_string()].into_iter().collect();
    /// assert!(set.contains("alpha"));
    /// assert!(!set.contains("beta"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<A> Default for Set<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Hash + Eq> FromIterator<A> for Set<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut inner = IndexSet::with_hasher(SetHasher::default());
        inner.extend(iter);
        Self { inner }
    }
}

impl<A> IntoIterator for Set<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Set<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Hash + Eq> PartialEq for Set<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<A: Hash + Eq> Eq for Set<A> {}

impl<A: Hash> Hash for Set<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .iter()
            .map(element_hash)
            .fold(0_u64, u64::wrapping_add);
        state.write_usize(self.len());
        state.write_u64(combined);
    }
}

impl<A: fmt::Debug> fmt::Debug for Set<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Set<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone);
