//! # Trisort
//!
//! `trisort` sorts collections of equal-length strings (and the rotations or suffixes of a
//! single text) by building a **character-lazy ternary trie** over their indices.
//!
//! Each key is read one byte per trie level and only as deep as needed to separate it from
//! the keys already placed. Keys that agree so far stay bundled at a single node until a new
//! key forces that bundle one level deeper. The sorted permutation is then read out with one
//! in-order traversal.
//!
//! ## Key Features
//!
//! - **Minimal Touch**: A key's bytes past the point where it becomes distinguishable are
//!   never read, unless it is a genuine duplicate.
//! - **Zero-Copy abstractions**: The [`KeyAccessor`] trait allows sorting arbitrary data structures
//!   (e.g., `Vec<Vec<u8>>`, or the rotations of a text) without copying the underlying data.
//! - **Stable**: Equal keys keep their original relative order.
//! - **In-Place Mutation**: Provides [`trisort_mut`] for sorting slices in-place.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use trisort::trisort_mut;
//!
//! let mut data = vec!["dog", "cat", "cow"];
//! trisort_mut(&mut data).unwrap();
//!
//! assert_eq!(data, vec!["cat", "cow", "dog"]);
//! ```
//!
//! ### Key Lengths
//!
//! By default every key must have the length of the first one ([`KeyLayout::Inferred`]).
//! A shorter key fails with [`SortError::CharacterOutOfRange`] as soon as the trie needs a byte
//! it does not have. Pass [`KeyLayout::Terminated`] to sort keys of mixed lengths.
//!
//! ```rust
//! use trisort::{trisort, trisort_with, KeyLayout, SortError};
//!
//! let data = ["ab", "a"];
//! assert!(matches!(trisort(&data), Err(SortError::CharacterOutOfRange { index: 1, .. })));
//! assert_eq!(trisort_with(&data, KeyLayout::Terminated).unwrap(), vec![1, 0]);
//! ```
//!
//! ### Suffixes
//!
//! ```rust
//! use trisort::suffix::suffix_array;
//!
//! assert_eq!(suffix_array(b"banana").unwrap(), vec![5, 3, 1, 0, 4, 2]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Insertion**: bounded by the key length; usually far less when keys diverge early.
//! - **Collection**: O(nodes), iterative, no recursion.
//! - **Memory Overhead**: One node per distinguishing position plus one index per key.
//!
//! Construction is single-threaded. Wrap the whole build in a lock if it must be shared.

pub mod algo;
pub mod collect;
pub mod core;
pub mod error;
pub mod insert;
pub mod store;
pub mod suffix;

pub use crate::algo::{SortStats, TrieSort, trisort, trisort_mut, trisort_with};
pub use crate::core::{KeyAccessor, KeyLayout, Symbol};
pub use crate::error::{Result, SortError};

pub mod prelude {
    pub use crate::algo::{TrieSort, trisort, trisort_mut, trisort_with};
    pub use crate::core::{KeyAccessor, KeyLayout};
    pub use crate::error::SortError;
}
