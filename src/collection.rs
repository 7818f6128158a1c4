//! Collection normalization.
//!
//! Every public operation accepts a *collection*: something set-like or
//! something sequence-like. This module turns such an input into the shape
//! an operation needs:
//!
//! - [`to_set`]: a deduplicated [`Set`] for membership tests
//! - [`to_sequence`]: an ordered slice for order-preserving traversal
//! - [`elements`]: the same order as [`to_sequence`], borrowed, without
//!   materializing a slice
//!
//! Both borrow the input when it already has the requested shape and build
//! a new container otherwise. Shape checking happens once, in
//! [`AsCollection::as_collection`], so every operation reports malformed
//! input through the same [`CollectionError::InvalidCollectionType`].
//!
//! # Examples
//!
//! ```rust
//! use std::borrow::Cow;
//! use setops::{Set, to_sequence, to_set};
//!
//! let sequence = vec![1, 2, 2, 3];
//! let normalized = to_set(&sequence).unwrap();
//! assert_eq!(normalized.len(), 3);
//!
//! let set: Set<i32> = [3, 1].into_iter().collect();
//! let normalized = to_sequence(&set).unwrap();
//! assert_eq!(&*normalized, &[3, 1]);
//!
//! // Inputs already in the requested shape are borrowed
//! assert!(matches!(to_set(&set).unwrap(), Cow::Borrowed(_)));
//! ```

use std::borrow::Cow;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::CollectionError;
use crate::set::{self, Set};
use crate::value::Value;

// =============================================================================
// Collection Definition
// =============================================================================

/// A borrowed view of a collection: either set-like or sequence-like.
///
/// This is a closed sum type; no other shapes exist.
#[derive(Debug)]
pub enum Collection<'a, A> {
    /// Unique elements, enumerated in insertion order.
    Set(&'a Set<A>),
    /// Ordered elements, possibly with duplicates.
    Sequence(&'a [A]),
}

impl<A> Clone for Collection<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Collection<'_, A> {}

impl<'a, A> Collection<'a, A> {
    /// Returns `true` if this is the set-like variant.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns `true` if this is the sequence-like variant.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the number of elements, counting duplicates in a sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Set(set) => set.len(),
            Self::Sequence(sequence) => sequence.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements in their natural enumeration order.
    ///
    /// For sets that is insertion order; for sequences it is index order,
    /// duplicates included.
    pub fn iter(&self) -> Elements<'a, A> {
        match *self {
            Self::Set(set) => Elements::Set(set.iter()),
            Self::Sequence(sequence) => Elements::Sequence(sequence.iter()),
        }
    }
}

impl<'a, A: Clone> Collection<'a, A> {
    /// Normalizes to a sequence.
    ///
    /// A sequence is returned as-is. A set is materialized in insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::{Collection, Set};
    ///
    /// let set: Set<char> = ['b', 'a'].into_iter().collect();
    /// let sequence = Collection::Set(&set).to_sequence();
    /// assert_eq!(&*sequence, &['b', 'a']);
    /// ```
    #[must_use]
    pub fn to_sequence(self) -> Cow<'a, [A]> {
        match self {
            Self::Sequence(sequence) => Cow::Borrowed(sequence),
            Self::Set(set) => {
                trace!("materializing set of {} elements as a sequence", set.len());
                Cow::Owned(set.iter().cloned().collect())
            }
        }
    }
}

impl<'a, A: Clone + Eq + Hash> Collection<'a, A> {
    /// Normalizes to a set.
    ///
    /// A set is returned as-is. A sequence is inserted element by element;
    /// duplicates collapse onto their first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Collection;
    ///
    /// let sequence = [1, 2, 2, 1];
    /// let set = Collection::Sequence(&sequence).to_set();
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn to_set(self) -> Cow<'a, Set<A>> {
        match self {
            Self::Set(set) => Cow::Borrowed(set),
            Self::Sequence(sequence) => {
                trace!("collecting sequence of {} elements into a set", sequence.len());
                Cow::Owned(sequence.iter().cloned().collect())
            }
        }
    }
}

impl<'a, A> From<&'a Set<A>> for Collection<'a, A> {
    fn from(set: &'a Set<A>) -> Self {
        Self::Set(set)
    }
}

impl<'a, A> From<&'a [A]> for Collection<'a, A> {
    fn from(sequence: &'a [A]) -> Self {
        Self::Sequence(sequence)
    }
}

impl<'a, A> From<&'a Vec<A>> for Collection<'a, A> {
    fn from(sequence: &'a Vec<A>) -> Self {
        Self::Sequence(sequence)
    }
}

impl<'a, A> IntoIterator for Collection<'a, A> {
    type Item = &'a A;
    type IntoIter = Elements<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Elements Iterator
// =============================================================================

/// Iterator over the elements of a [`Collection`] in enumeration order.
#[derive(Debug, Clone)]
pub enum Elements<'a, A> {
    /// Elements of a set.
    Set(set::Iter<'a, A>),
    /// Elements of a sequence.
    Sequence(std::slice::Iter<'a, A>),
}

impl<'a, A> Iterator for Elements<'a, A> {
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Set(iter) => iter.next(),
            Self::Sequence(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Set(iter) => iter.size_hint(),
            Self::Sequence(iter) => iter.size_hint(),
        }
    }
}

impl<A> ExactSizeIterator for Elements<'_, A> {}

// =============================================================================
// AsCollection
// =============================================================================

/// Types that can be viewed as a [`Collection`].
///
/// Statically shaped containers always succeed. Dynamically shaped inputs
/// such as [`Value`] fail with [`CollectionError::InvalidCollectionType`]
/// when they are neither a set nor a sequence.
pub trait AsCollection<A> {
    /// Views `self` as a collection, or reports why it is not one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCollectionType`] if `self` is
    /// neither set-like nor sequence-like.
    fn as_collection(&self) -> Result<Collection<'_, A>, CollectionError>;
}

impl<A> AsCollection<A> for Collection<'_, A> {
    fn as_collection(&self) -> Result<Collection<'_, A>, CollectionError> {
        Ok(*self)
    }
}

impl<A> AsCollection<A> for Set<A> {
    fn as_collection(&self) -> Result<Collection<'_, A>, CollectionError> {
        Ok(Collection::Set(self))
    }
}

impl<A> AsCollection<A> for [A] {
    fn as_collection(&self) -> Result<Collection<'_, A>, CollectionError> {
        Ok(Collection::Sequence(self))
    }
}

impl<A> AsCollection<A> for Vec<A> {
    fn as_collection(&self) -> Result<Collection<'_, A>, CollectionError> {
        Ok(Collection::Sequence(self))
    }
}

impl<A, const N: usize> AsCollection<A> for [A; N] {
    fn as_collection(&self) -> Result<Collection<'_, A>, CollectionError> {
        Ok(Collection::Sequence(self))
    }
}

impl<A, T: AsCollection<A> + ?Sized> AsCollection<A> for &T {
    fn as_collection(&self) -> Result<Collection<'_, A>, CollectionError> {
        (**self).as_collection()
    }
}

impl AsCollection<Self> for Value {
    fn as_collection(&self) -> Result<Collection<'_, Self>, CollectionError> {
        match self {
            Self::Sequence(sequence) => Ok(Collection::Sequence(sequence)),
            Self::Set(set) => Ok(Collection::Set(set)),
            other => Err(CollectionError::InvalidCollectionType {
                found: other.kind(),
            }),
        }
    }
}

// =============================================================================
// Normalization entry points
// =============================================================================

fn checked<A, C>(collection: &C) -> Result<Collection<'_, A>, CollectionError>
where
    C: AsCollection<A> + ?Sized,
{
    collection
        .as_collection()
        .inspect_err(|error| debug!("rejected collection input: {error}"))
}

/// Normalizes any accepted collection to a [`Set`].
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if the input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::{CollectionError, Value, to_set};
///
/// let letters = vec!["a", "b", "a"];
/// let set = to_set(&letters).unwrap();
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(
///     to_set(&Value::Null).unwrap_err(),
///     CollectionError::InvalidCollectionType { found: "null" }
/// );
/// ```
pub fn to_set<A, C>(collection: &C) -> Result<Cow<'_, Set<A>>, CollectionError>
where
    A: Clone + Eq + Hash,
    C: AsCollection<A> + ?Sized,
{
    Ok(checked(collection)?.to_set())
}

/// Normalizes any accepted collection to an ordered sequence.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if the input is
/// neither set-like nor sequence-like.
pub fn to_sequence<A, C>(collection: &C) -> Result<Cow<'_, [A]>, CollectionError>
where
    A: Clone,
    C: AsCollection<A> + ?Sized,
{
    Ok(checked(collection)?.to_sequence())
}

/// Enumerates any accepted collection in its natural order.
///
/// Yields exactly the elements of [`to_sequence`], by reference and
/// without allocating.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if the input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::{Value, elements};
///
/// let value = Value::set([2, 1, 2]);
/// let visited: Vec<String> = elements(&value).unwrap().map(|v| v.to_string()).collect();
/// assert_eq!(visited, vec!["2", "1"]);
/// ```
pub fn elements<A, C>(collection: &C) -> Result<Elements<'_, A>, CollectionError>
where
    C: AsCollection<A> + ?Sized,
{
    Ok(checked(collection)?.iter())
}

static_assertions::assert_impl_all!(Collection<'static, i32>: Send, Sync, Copy);
