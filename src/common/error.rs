//! Error types for btreedict.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in btreedict.
///
/// A lookup miss is not an error; it is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree was configured with an unusable minimum degree.
    #[error("invalid minimum degree {min_degree}: must be at least 2")]
    InvalidMinDegree { min_degree: usize },

    /// An internal structural rule was broken.
    ///
    /// This indicates a bug, not bad input. It is never reachable through
    /// `insert`/`lookup` on a correctly built tree.
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),
}

/// The specific structural rule that was broken.
///
/// The first five variants guard the insert path; the rest are reported by
/// `BTree::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The parent has no room to receive the promoted key.
    #[error("cannot split a child of a full parent ({keys} keys, max {max_keys})")]
    ParentFull { keys: usize, max_keys: usize },

    /// The split target's parent is a leaf and has no children.
    #[error("cannot split a child of a leaf")]
    ParentIsLeaf,

    /// No child exists at the requested index.
    #[error("child {index} does not exist (parent has {children} children)")]
    ChildMissing { index: usize, children: usize },

    /// The child is not full, so splitting it would underfill both halves.
    #[error("child {index} is not full ({keys} keys, expected {max_keys})")]
    ChildNotFull {
        index: usize,
        keys: usize,
        max_keys: usize,
    },

    /// An insert pass started at a node with no room for another key.
    #[error("cannot insert into a full node ({keys} keys, max {max_keys})")]
    NodeFull { keys: usize, max_keys: usize },

    /// Keys are not strictly increasing in traversal order.
    #[error("keys out of order at depth {depth}")]
    KeysOutOfOrder { depth: usize },

    /// A node holds more or fewer keys than its position allows.
    #[error("node at depth {depth} holds {keys} keys, allowed {min_keys}..={max_keys}")]
    KeyCountOutOfBounds {
        depth: usize,
        keys: usize,
        min_keys: usize,
        max_keys: usize,
    },

    /// Keys and values of a node are not index-aligned.
    #[error("node at depth {depth} has {keys} keys but {values} values")]
    ValueCountMismatch {
        depth: usize,
        keys: usize,
        values: usize,
    },

    /// An internal node's fan-out doesn't match its key count, or a leaf has children.
    #[error("node at depth {depth} has {keys} keys but {children} children")]
    ChildCountMismatch {
        depth: usize,
        keys: usize,
        children: usize,
    },

    /// Leaves were found at different depths.
    #[error("leaf at depth {found}, expected {expected}")]
    UnevenLeafDepth { expected: usize, found: usize },

    /// The maintained record counter disagrees with the stored keys.
    #[error("tree counts {counted} records but stores {stored}")]
    CountMismatch { counted: usize, stored: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMinDegree { min_degree: 1 };
        assert_eq!(
            format!("{}", err),
            "invalid minimum degree 1: must be at least 2"
        );

        let err = Error::from(InvariantViolation::ParentIsLeaf);
        assert_eq!(
            format!("{}", err),
            "invariant violation: cannot split a child of a leaf"
        );
    }

    #[test]
    fn test_violation_conversion() {
        let violation = InvariantViolation::ChildMissing {
            index: 7,
            children: 3,
        };
        let err: Error = violation.clone().into();

        match err {
            Error::InvariantViolation(inner) => assert_eq!(inner, violation),
            _ => panic!("Expected InvariantViolation"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
