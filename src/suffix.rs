//! Suffix and rotation sorting over a single text.
//!
//! The keys here are virtual: [`Rotations`] and [`Suffixes`] answer
//! [`KeyAccessor`] queries by indexing into the borrowed text, so sorting `n`
//! rotations never materializes `n` strings.

use crate::algo::trisort_with;
use crate::core::{KeyAccessor, KeyLayout};
use crate::error::Result;

/// The cyclic rotations of a text. Key `i` starts at byte `i` and wraps around.
#[derive(Clone, Copy, Debug)]
pub struct Rotations<'a> {
    text: &'a [u8],
}

impl<'a> Rotations<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text }
    }
}

impl KeyAccessor for Rotations<'_> {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn key_len(&self, _index: usize) -> usize {
        self.text.len()
    }

    #[inline(always)]
    fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
        let n = self.text.len();
        if position >= n {
            return None;
        }
        let offset = index + position;
        Some(self.text[if offset >= n { offset - n } else { offset }])
    }
}

/// The suffixes of a text. Key `i` is `text[i..]`.
#[derive(Clone, Copy, Debug)]
pub struct Suffixes<'a> {
    text: &'a [u8],
}

impl<'a> Suffixes<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text }
    }
}

impl KeyAccessor for Suffixes<'_> {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn key_len(&self, index: usize) -> usize {
        self.text.len() - index
    }

    #[inline(always)]
    fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
        self.text.get(index + position).copied()
    }
}

/// Sorts the cyclic rotations of `text`.
///
/// Entry `k` of the result is the starting offset of the `k`-th smallest rotation.
/// Identical rotations (periodic texts) keep ascending offset order.
///
/// # Examples
///
/// ```
/// use trisort::suffix::circular_suffix_array;
///
/// assert_eq!(circular_suffix_array(b"abab").unwrap(), vec![0, 2, 1, 3]);
/// ```
pub fn circular_suffix_array(text: &[u8]) -> Result<Vec<usize>> {
    trisort_with(&Rotations::new(text), KeyLayout::Fixed(text.len()))
}

/// Sorts the suffixes of `text`; a suffix sorts before every suffix it prefixes.
///
/// # Examples
///
/// ```
/// use trisort::suffix::suffix_array;
///
/// assert_eq!(suffix_array(b"banana").unwrap(), vec![5, 3, 1, 0, 4, 2]);
/// ```
pub fn suffix_array(text: &[u8]) -> Result<Vec<usize>> {
    trisort_with(&Suffixes::new(text), KeyLayout::Terminated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_around() {
        let rotations = Rotations::new(b"abc");
        let second: Vec<u8> = (0..3).filter_map(|p| rotations.symbol_at(1, p)).collect();
        assert_eq!(second, b"bca");
        assert_eq!(rotations.symbol_at(2, 3), None);
    }

    #[test]
    fn test_suffix_lengths() {
        let suffixes = Suffixes::new(b"abc");
        assert_eq!(suffixes.key_len(0), 3);
        assert_eq!(suffixes.key_len(2), 1);
        assert_eq!(suffixes.symbol_at(2, 1), None);
    }
}
