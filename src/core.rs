//! Core traits and types for Trisort.
//!
//! This module defines:
//! - [`KeyAccessor`]: The main trait users implement to sort their custom types.
//! - [`KeyLayout`]: How key lengths are interpreted during a sort.
//! - [`Symbol`]: A single key position as seen by the trie.

use std::collections::VecDeque;

/// One position of a key as stored in the trie.
///
/// Bytes are lifted into a wider space so that [`Symbol::END`] orders strictly
/// below every byte value. A terminated key therefore sorts before any key it
/// is a prefix of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u16);

impl Symbol {
    /// End-of-key marker used by [`KeyLayout::Terminated`].
    pub const END: Symbol = Symbol(0);

    /// Lifts a key byte into symbol space.
    #[inline(always)]
    pub const fn byte(byte: u8) -> Self {
        Symbol(byte as u16 + 1)
    }

    /// Returns the byte this symbol stands for, or `None` for [`Symbol::END`].
    #[inline]
    pub const fn as_byte(self) -> Option<u8> {
        match self.0 {
            0 => None,
            v => Some((v - 1) as u8),
        }
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        self.0 == 0
    }
}

/// How the lengths of the keys are interpreted.
///
/// Fixed layouts compare keys up to a single width shared by the whole run.
/// The terminated layout accepts keys of any length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyLayout {
    /// Fixed width taken from the length of the first key.
    #[default]
    Inferred,
    /// Fixed width supplied by the caller.
    Fixed(usize),
    /// Variable length keys, each read as if followed by [`Symbol::END`].
    Terminated,
}

/// A trait for reading keys from a collection one byte at a time, without copying.
///
/// This trait allows `trisort` to sort any collection whose elements can be viewed
/// as byte sequences (e.g., `Vec<String>`, `Vec<Vec<u8>>`, or virtual keys such as
/// the rotations of a text, see [`crate::suffix::Rotations`]).
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use trisort::core::KeyAccessor;
///
/// struct MyCollection {
///     data: Vec<String>,
/// }
///
/// impl KeyAccessor for MyCollection {
///     fn len(&self) -> usize {
///         self.data.len()
///     }
///
///     fn key_len(&self, index: usize) -> usize {
///         self.data[index].len()
///     }
///
///     fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
///         self.data[index].as_bytes().get(position).copied()
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns the number of keys in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length in bytes of the key at `index`.
    fn key_len(&self, index: usize) -> usize;

    /// Returns the byte at `position` of the key at `index`, or `None` past its end.
    fn symbol_at(&self, index: usize, position: usize) -> Option<u8>;
}

// Blanket implementation for indexable slices of byte-ref types.
impl<T: AsRef<[u8]>> KeyAccessor for [T] {
    fn len(&self) -> usize {
        self.len()
    }

    fn key_len(&self, index: usize) -> usize {
        self[index].as_ref().len()
    }

    #[inline(always)]
    fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
        self[index].as_ref().get(position).copied()
    }
}

// Arrays let literal inputs be passed without `.as_slice()`.
impl<T: AsRef<[u8]>, const N: usize> KeyAccessor for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn key_len(&self, index: usize) -> usize {
        self[index].as_ref().len()
    }

    #[inline(always)]
    fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
        self[index].as_ref().get(position).copied()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: AsRef<[u8]>> KeyAccessor for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn key_len(&self, index: usize) -> usize {
        self[index].as_ref().len()
    }

    #[inline(always)]
    fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
        self[index].as_ref().get(position).copied()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access, so it is suitable for Trisort.
impl<T: AsRef<[u8]>> KeyAccessor for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn key_len(&self, index: usize) -> usize {
        self[index].as_ref().len()
    }

    fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
        self[index].as_ref().get(position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_orders_below_every_byte() {
        assert!(Symbol::END < Symbol::byte(0));
        assert!(Symbol::byte(0) < Symbol::byte(1));
        assert!(Symbol::byte(254) < Symbol::byte(255));
        assert_eq!(Symbol::byte(255).as_byte(), Some(255));
        assert_eq!(Symbol::END.as_byte(), None);
        assert!(Symbol::END.is_end());
    }

    #[test]
    fn array_accessor_reports_its_length() {
        let keys = ["ab", "c"];
        assert_eq!(KeyAccessor::len(&keys), 2);
        assert_eq!(keys.key_len(0), 2);
        assert_eq!(keys.symbol_at(0, 1), Some(b'b'));
        assert_eq!(keys.symbol_at(1, 1), None);
    }
}
