//! Error types for collection normalization.
//!
//! Normalization is the only place the library can fail on its own account:
//! an input that is neither set-like nor sequence-like is rejected with
//! [`CollectionError::InvalidCollectionType`]. Failures raised by
//! caller-supplied closures are never wrapped; see the `try_*` operations in
//! [`crate::algebra`].

/// Represents errors that can occur while normalizing a collection.
///
/// # Examples
///
/// ```rust
/// use setops::{CollectionError, Value, union};
///
/// let result = union(&Value::from(3), &Value::sequence([1, 2]));
/// assert_eq!(
///     result,
///     Err(CollectionError::InvalidCollectionType { found: "integer" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// The input is neither a set nor a sequence.
    InvalidCollectionType {
        /// The kind of value that was supplied instead.
        found: &'static str,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCollectionType { found } => write!(
                formatter,
                "the argument must be a set or a sequence, found {found}"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_collection_type_display() {
        let error = CollectionError::InvalidCollectionType { found: "integer" };
        assert_eq!(
            format!("{error}"),
            "the argument must be a set or a sequence, found integer"
        );
    }

    #[test]
    fn test_invalid_collection_type_display_text() {
        let error = CollectionError::InvalidCollectionType { found: "text" };
        assert_eq!(
            error.to_string(),
            "the argument must be a set or a sequence, found text"
        );
    }

    #[test]
    fn test_invalid_collection_type_equality() {
        let error1 = CollectionError::InvalidCollectionType { found: "null" };
        let error2 = CollectionError::InvalidCollectionType { found: "null" };
        let error3 = CollectionError::InvalidCollectionType { found: "boolean" };

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_collection_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}

        assert_error(&CollectionError::InvalidCollectionType { found: "integer" });
    }
}
