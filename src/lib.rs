//! # setops
//!
//! Set algebra over collections that may be either sets or sequences.
//!
//! ## Overview
//!
//! Every operation accepts a *collection*: a [`Set`], a `Vec`, a slice, an
//! array, or a dynamically typed [`Value`] holding a sequence or a set.
//! Inputs are normalized first (see [`collection`]) and the operation then
//! works on the normalized form (see [`algebra`]):
//!
//! - **Traversals**: [`map`], [`fold`], [`forall`], [`exists`] and their
//!   fallible `try_*` variants
//! - **Set operations**: [`union`], [`intersection`], [`difference`],
//!   [`symmetric_difference`]
//! - **Comparisons**: [`is_subset`], [`are_equal`]
//!
//! All operations are pure. Inputs are never modified and every
//! set-producing operation returns a fresh [`Set`].
//!
//! ## Feature Flags
//!
//! - `fxhash`: hash set elements with `rustc-hash`
//! - `ahash`: hash set elements with `ahash`
//!
//! ## Example
//!
//! ```rust
//! use setops::prelude::*;
//!
//! let evens = union(&[2, 4], &set![6, 8]).unwrap();
//! assert_eq!(are_equal(&evens, &[8, 6, 4, 2, 2]), Ok(true));
//!
//! let mixed = intersection(&values![11, "abc", 4], &values!["def", 4, "ghi"]).unwrap();
//! assert_eq!(mixed, set![Value::from(4)]);
//!
//! // Anything that is neither a set nor a sequence is rejected
//! assert_eq!(
//!     union(&Value::from("abc"), &values![1]),
//!     Err(CollectionError::InvalidCollectionType { found: "text" })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection types, every operation and both macros.
///
/// # Usage
///
/// ```rust
/// use setops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::collection::*;
    pub use crate::error::*;
    pub use crate::set::Set;
    pub use crate::value::Value;
    pub use crate::{set, values};
}

pub mod algebra;
pub mod collection;
pub mod error;
mod macros;
pub mod set;
pub mod value;

pub use algebra::{
    are_equal, difference, exists, fold, forall, intersection, is_subset, map,
    symmetric_difference, try_exists, try_fold, try_forall, try_map, union,
};
pub use collection::{AsCollection, Collection, Elements, elements, to_sequence, to_set};
pub use error::CollectionError;
pub use set::Set;
pub use value::Value;
