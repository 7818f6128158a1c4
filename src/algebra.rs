//! Set algebra over collections.
//!
//! Every operation normalizes its inputs first (see [`crate::collection`])
//! and then makes a single pass over the normalized data. Traversals
//! ([`map`], [`fold`], [`forall`], [`exists`]) walk the elements in
//! enumeration order without copying them; set operations work on
//! normalized sets. Inputs are never
//! modified and every set-producing operation returns a fresh [`Set`].
//!
//! | Operation                | Result                                     |
//! |--------------------------|--------------------------------------------|
//! | [`map`]                  | set of `f(x)` for each element             |
//! | [`fold`]                 | left-to-right reduction                    |
//! | [`forall`]               | predicate holds for every element          |
//! | [`exists`]               | predicate holds for some element           |
//! | [`union`]                | elements in either input                   |
//! | [`intersection`]         | elements in both inputs                    |
//! | [`difference`]           | elements of the first not in the second    |
//! | [`symmetric_difference`] | elements in exactly one input              |
//! | [`is_subset`]            | every left element is in the right         |
//! | [`are_equal`]            | both inputs hold the same elements         |
//!
//! Whether an input is set-like or sequence-like never affects a result:
//!
//! ```rust
//! use setops::{Set, are_equal};
//!
//! let set: Set<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(are_equal(&[1, 2, 3, 3, 3], &set), Ok(true));
//! ```
//!
//! # Caller-supplied closures
//!
//! [`try_map`], [`try_fold`], [`try_forall`] and [`try_exists`] accept
//! closures that may fail. The closure's error type only has to absorb
//! [`CollectionError`]; its own failures pass through unchanged and stop the
//! traversal at the first error.

use std::hash::Hash;

use crate::collection::{AsCollection, elements, to_set};
use crate::error::CollectionError;
use crate::set::Set;

// =============================================================================
// Traversals
// =============================================================================

/// Applies `f` to each element and collects the results into a new set.
///
/// Elements are visited in enumeration order. Results that compare equal
/// collapse.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if `collection` is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::map;
///
/// let parities = map(&[1, 2, 3, 4], |n| n % 2).unwrap();
/// assert_eq!(parities.len(), 2);
/// ```
pub fn map<A, B, C, F>(collection: &C, f: F) -> Result<Set<B>, CollectionError>
where
    B: Eq + Hash,
    C: AsCollection<A> + ?Sized,
    F: FnMut(&A) -> B,
{
    Ok(elements(collection)?.map(f).collect())
}

/// Like [`map`], but `f` may fail.
///
/// # Errors
///
/// Returns the first error produced by `f`, or an `E` built from
/// [`CollectionError::InvalidCollectionType`] for malformed input.
///
/// # Examples
///
/// ```rust
/// use setops::{CollectionError, try_map};
///
/// #[derive(Debug, PartialEq)]
/// enum ParseFailure {
///     Collection(CollectionError),
///     Digit(char),
/// }
///
/// impl From<CollectionError> for ParseFailure {
///     fn from(error: CollectionError) -> Self {
///         Self::Collection(error)
///     }
/// }
///
/// let digit = |c: &char| c.to_digit(10).ok_or(ParseFailure::Digit(*c));
///
/// assert_eq!(try_map(&['1', '2'], digit).unwrap().len(), 2);
/// assert_eq!(try_map(&['1', 'x'], digit), Err(ParseFailure::Digit('x')));
/// ```
pub fn try_map<A, B, C, E, F>(collection: &C, f: F) -> Result<Set<B>, E>
where
    B: Eq + Hash,
    C: AsCollection<A> + ?Sized,
    E: From<CollectionError>,
    F: FnMut(&A) -> Result<B, E>,
{
    elements(collection)?.map(f).collect()
}

/// Folds the elements from left to right into an accumulator.
///
/// The order is the collection's enumeration order: index order for
/// sequences, insertion order for sets.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if `collection` is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::fold;
///
/// let joined = fold(&["a", "b", "c"], String::new(), |mut acc, s| {
///     acc.push_str(s);
///     acc
/// });
/// assert_eq!(joined.as_deref(), Ok("abc"));
/// ```
pub fn fold<A, C, X, F>(collection: &C, initial: X, f: F) -> Result<X, CollectionError>
where
    C: AsCollection<A> + ?Sized,
    F: FnMut(X, &A) -> X,
{
    Ok(elements(collection)?.fold(initial, f))
}

/// Like [`fold`], but `f` may fail.
///
/// # Errors
///
/// Returns the first error produced by `f`, or an `E` built from
/// [`CollectionError::InvalidCollectionType`] for malformed input.
pub fn try_fold<A, C, X, E, F>(collection: &C, initial: X, f: F) -> Result<X, E>
where
    C: AsCollection<A> + ?Sized,
    E: From<CollectionError>,
    F: FnMut(X, &A) -> Result<X, E>,
{
    elements(collection)?.try_fold(initial, f)
}

/// Returns `true` if `predicate` holds for every element.
///
/// Empty collections satisfy any predicate. Evaluation stops at the first
/// element for which `predicate` is `false`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if `collection` is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::forall;
///
/// assert_eq!(forall(&[2, 4, 6], |n| n % 2 == 0), Ok(true));
/// assert_eq!(forall(&[0_i32; 0], |_| false), Ok(true));
/// ```
pub fn forall<A, C, P>(collection: &C, predicate: P) -> Result<bool, CollectionError>
where
    C: AsCollection<A> + ?Sized,
    P: FnMut(&A) -> bool,
{
    Ok(elements(collection)?.all(predicate))
}

/// Like [`forall`], but `predicate` may fail.
///
/// # Errors
///
/// Returns the first error produced by `predicate`, or an `E` built from
/// [`CollectionError::InvalidCollectionType`] for malformed input.
pub fn try_forall<A, C, E, P>(collection: &C, mut predicate: P) -> Result<bool, E>
where
    C: AsCollection<A> + ?Sized,
    E: From<CollectionError>,
    P: FnMut(&A) -> Result<bool, E>,
{
    for element in elements(collection)? {
        if !predicate(element)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Empty collections never satisfy it. Evaluation stops at the first
/// element for which `predicate` is `true`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if `collection` is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::exists;
///
/// assert_eq!(exists(&[1, 3, 4], |n| n % 2 == 0), Ok(true));
/// assert_eq!(exists(&[0_i32; 0], |_| true), Ok(false));
/// ```
pub fn exists<A, C, P>(collection: &C, predicate: P) -> Result<bool, CollectionError>
where
    C: AsCollection<A> + ?Sized,
    P: FnMut(&A) -> bool,
{
    Ok(elements(collection)?.any(predicate))
}

/// Like [`exists`], but `predicate` may fail.
///
/// # Errors
///
/// Returns the first error produced by `predicate`, or an `E` built from
/// [`CollectionError::InvalidCollectionType`] for malformed input.
pub fn try_exists<A, C, E, P>(collection: &C, mut predicate: P) -> Result<bool, E>
where
    C: AsCollection<A> + ?Sized,
    E: From<CollectionError>,
    P: FnMut(&A) -> Result<bool, E>,
{
    for element in elements(collection)? {
        if predicate(element)? {
            return Ok(true);
        }
    }
    Ok(false)
}

// =============================================================================
// Set operations
// =============================================================================

/// Returns the union of two collections.
///
/// Elements of `left` come first in the result's insertion order.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if either input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::{set, union};
///
/// assert_eq!(union(&[1, 3, 2], &[2, 4]), Ok(set![1, 2, 3, 4]));
/// ```
pub fn union<A, L, R>(left: &L, right: &R) -> Result<Set<A>, CollectionError>
where
    A: Clone + Eq + Hash,
    L: AsCollection<A> + ?Sized,
    R: AsCollection<A> + ?Sized,
{
    let left = to_set(left)?;
    let right = to_set(right)?;
    Ok(left.iter().chain(right.iter()).cloned().collect())
}

/// Returns the elements present in both collections.
///
/// Iterates the second set and tests membership in the first, so the
/// result follows the insertion order of `right`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if either input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::{Value, intersection, set, values};
///
/// let result = intersection(&values![11, "abc", 4], &values!["def", 4, "ghi"]);
/// assert_eq!(result, Ok(set![Value::from(4)]));
/// ```
pub fn intersection<A, L, R>(left: &L, right: &R) -> Result<Set<A>, CollectionError>
where
    A: Clone + Eq + Hash,
    L: AsCollection<A> + ?Sized,
    R: AsCollection<A> + ?Sized,
{
    let left = to_set(left)?;
    let right = to_set(right)?;
    Ok(right
        .iter()
        .filter(|element| left.contains(*element))
        .cloned()
        .collect())
}

/// Returns the elements of `left` that are not in `right`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if either input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::{Value, difference, set, values};
///
/// let result = difference(&values!["x", "y", 1], &values!["y", 7, "x"]);
/// assert_eq!(result, Ok(set![Value::from(1)]));
/// ```
pub fn difference<A, L, R>(left: &L, right: &R) -> Result<Set<A>, CollectionError>
where
    A: Clone + Eq + Hash,
    L: AsCollection<A> + ?Sized,
    R: AsCollection<A> + ?Sized,
{
    let left = to_set(left)?;
    let right = to_set(right)?;
    Ok(left
        .iter()
        .filter(|element| !right.contains(*element))
        .cloned()
        .collect())
}

/// Returns the elements that are in exactly one of the two collections.
///
/// Defined as `union(difference(left, right), difference(right, left))`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if either input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::{set, symmetric_difference};
///
/// assert_eq!(symmetric_difference(&[1, 2, 3], &[2, 3, 4]), Ok(set![1, 4]));
/// ```
pub fn symmetric_difference<A, L, R>(left: &L, right: &R) -> Result<Set<A>, CollectionError>
where
    A: Clone + Eq + Hash,
    L: AsCollection<A> + ?Sized,
    R: AsCollection<A> + ?Sized,
{
    let left_only = difference(left, right)?;
    let right_only = difference(right, left)?;
    union(&left_only, &right_only)
}

/// Returns `true` if every element of `left` is also in `right`.
///
/// The empty collection is a subset of everything, itself included.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if either input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::is_subset;
///
/// assert_eq!(is_subset(&[1, 2], &[1, 2, 3]), Ok(true));
/// assert_eq!(is_subset(&[1, 2, 3], &[1, 2]), Ok(false));
/// ```
pub fn is_subset<A, L, R>(left: &L, right: &R) -> Result<bool, CollectionError>
where
    A: Clone + Eq + Hash,
    L: AsCollection<A> + ?Sized,
    R: AsCollection<A> + ?Sized,
{
    let left = to_set(left)?;
    let right = to_set(right)?;
    Ok(left.iter().all(|element| right.contains(element)))
}

/// Returns `true` if both collections hold the same elements.
///
/// Shape, order and duplicate counts are ignored.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidCollectionType`] if either input is
/// neither set-like nor sequence-like.
///
/// # Examples
///
/// ```rust
/// use setops::{are_equal, set};
///
/// assert_eq!(are_equal(&[1, 2, 2], &set![2, 1]), Ok(true));
/// assert_eq!(are_equal(&[1, 2], &[1, 2, 3]), Ok(false));
/// ```
pub fn are_equal<A, L, R>(left: &L, right: &R) -> Result<bool, CollectionError>
where
    A: Clone + Eq + Hash,
    L: AsCollection<A> + ?Sized,
    R: AsCollection<A> + ?Sized,
{
    let left = to_set(left)?;
    let right = to_set(right)?;
    Ok(is_subset(&*left, &*right)? && is_subset(&*right, &*left)?)
}
