//! Construction macros.

/// Builds a [`Set`](crate::Set) from a list of elements.
///
/// Duplicates collapse onto their first occurrence.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, set};
///
/// let numbers = set![3, 1, 3];
/// assert_eq!(numbers.len(), 2);
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        [$($element),+].into_iter().collect::<$crate::Set<_>>()
    };
}

/// Builds a `Vec<Value>` from heterogeneous literals.
///
/// Each element is converted with `Value::from`, so integers, strings,
/// booleans and nested values can be mixed.
///
/// # Examples
///
/// ```rust
/// use setops::{Value, values};
///
/// let mixed = values![11, "abc", 4, true];
/// assert_eq!(mixed[1], Value::from("abc"));
/// assert_eq!(mixed.len(), 4);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($element:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($element)),+]
    };
}
