//! Error types for Trisort.

use thiserror::Error;

/// Errors that abort a sort.
///
/// A failed sort never yields a partial permutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Insertion needed a position past the end of a key.
    ///
    /// Raised under fixed layouts when a key is shorter than the shared width
    /// and the trie has to look past its last byte to place it.
    #[error("key {index} has no symbol at position {position} (key length {len})")]
    CharacterOutOfRange {
        /// The offending key.
        index: usize,
        /// The position that was requested.
        position: usize,
        /// The length of the offending key.
        len: usize,
    },

    /// A key is longer than the fixed width of the run.
    #[error("key {index} has length {len}, longer than the fixed key width {width}")]
    KeyTooLong {
        /// The offending key.
        index: usize,
        /// The length of the offending key.
        len: usize,
        /// The fixed width of the run.
        width: usize,
    },

    /// The trie ran out of node ids.
    #[error("trie is full at {nodes} nodes")]
    TrieFull {
        /// Nodes allocated when the limit was hit.
        nodes: usize,
    },
}

impl SortError {
    /// Returns the index of the key that caused the failure, if one key is to blame.
    pub fn index(&self) -> Option<usize> {
        match self {
            SortError::CharacterOutOfRange { index, .. } | SortError::KeyTooLong { index, .. } => {
                Some(*index)
            }
            SortError::TrieFull { .. } => None,
        }
    }
}

/// Result type for sorting operations.
pub type Result<T> = std::result::Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SortError::CharacterOutOfRange {
            index: 1,
            position: 1,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "key 1 has no symbol at position 1 (key length 1)"
        );
        assert_eq!(err.index(), Some(1));

        let err = SortError::KeyTooLong {
            index: 3,
            len: 5,
            width: 4,
        };
        assert_eq!(
            err.to_string(),
            "key 3 has length 5, longer than the fixed key width 4"
        );
        assert_eq!(err.index(), Some(3));

        let err = SortError::TrieFull { nodes: 7 };
        assert_eq!(err.to_string(), "trie is full at 7 nodes");
        assert_eq!(err.index(), None);
    }
}
