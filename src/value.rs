//! Dynamically typed elements with strict equality.
//!
//! [`Value`] lets a single collection hold elements of different kinds,
//! such as `[11, "abc", 4]`. Equality never coerces between kinds:
//! `Value::Integer(3)` and `Value::Text("3")` are different elements, and so
//! are `Value::Integer(1)` and `Value::Float(1.0)`.
//!
//! Floats compare by canonical bit pattern: every NaN equals every other
//! NaN, and `0.0` equals `-0.0`. This gives `Value` a lawful `Eq` and `Hash`.
//!
//! A `Value` can itself be a sequence or a set. Only those two variants are
//! accepted where a collection is expected; every other variant is rejected
//! with [`CollectionError::InvalidCollectionType`](crate::CollectionError).
//!
//! # Examples
//!
//! ```rust
//! use setops::{Value, is_subset};
//!
//! assert_ne!(Value::from(3), Value::from("3"));
//!
//! let numbers = Value::sequence([3]);
//! let strings = Value::sequence(["3"]);
//! assert_eq!(is_subset(&numbers, &strings), Ok(false));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::FpCategory;

use crate::set::Set;

/// A dynamically typed element.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    Text(String),
    /// An ordered sequence that may contain duplicates.
    Sequence(Vec<Value>),
    /// A deduplicated set.
    Set(Set<Value>),
}

impl Value {
    /// Builds a [`Value::Sequence`] from anything convertible into values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Value;
    ///
    /// let value = Value::sequence([1, 2, 2]);
    /// assert_eq!(value.to_string(), "[1, 2, 2]");
    /// ```
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Sequence(elements.into_iter().map(Into::into).collect())
    }

    /// Builds a [`Value::Set`] from anything convertible into values.
    ///
    /// Duplicates collapse; the first occurrence fixes the position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Value;
    ///
    /// let value = Value::set([1, 2, 2]);
    /// assert_eq!(value.to_string(), "{1, 2}");
    /// ```
    pub fn set<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Set(elements.into_iter().map(Into::into).collect())
    }

    /// Returns a short name for the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
            Self::Set(_) => "set",
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl From<$integer> for Value {
                fn from(value: $integer) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

impl From<Set<Self>> for Value {
    fn from(value: Set<Self>) -> Self {
        Self::Set(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Canonical bits of a float: all NaNs collapse, as do both zeros.
fn float_key(value: f64) -> u64 {
    match value.classify() {
        FpCategory::Nan => f64::NAN.to_bits(),
        FpCategory::Zero => 0,
        _ => value.to_bits(),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => float_key(*left) == float_key(*right),
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Sequence(left), Self::Sequence(right)) => left == right,
            (Self::Set(left), Self::Set(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(value) => value.hash(state),
            Self::Integer(value) => value.hash(state),
            Self::Float(value) => float_key(*value).hash(state),
            Self::Text(value) => value.hash(state),
            Self::Sequence(elements) => elements.hash(state),
            Self::Set(elements) => elements.hash(state),
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) if value.is_infinite() => {
                let sign = if value.is_sign_negative() { "-" } else { "" };
                write!(formatter, "{sign}Infinity")
            }
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value:?}"),
            Self::Sequence(elements) => {
                write!(formatter, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                write!(formatter, "]")
            }
            Self::Set(elements) => write!(formatter, "{elements}"),
        }
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
