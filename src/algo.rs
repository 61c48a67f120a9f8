//! Sorting entry points.
//!
//! A sort runs in two phases that never interleave:
//! 1. **Build**: every key is placed into a [`TrieStore`] by an [`Inserter`], reading
//!    only as many symbols as needed to separate it from the keys already placed.
//! 2. **Collect**: one in-order traversal reads the permutation back out.
//!
//! The main entry points are [`trisort`], [`trisort_with`] and [`trisort_mut`].

use crate::collect::SortedIndices;
use crate::core::{KeyAccessor, KeyLayout};
use crate::error::Result;
use crate::insert::{Boundary, Inserter};
use crate::store::TrieStore;
use tracing::debug;

/// Performs an index-based sort on the provided collection.
///
/// This function does not modify the input collection. Instead, it returns a `Vec<usize>`
/// containing the indices that order the collection. Equal keys keep their original
/// relative order.
///
/// All keys must share the length of the first key (see [`KeyLayout::Inferred`]);
/// use [`trisort_with`] and [`KeyLayout::Terminated`] for keys of mixed lengths.
///
/// # Errors
///
/// Fails with [`SortError`](crate::SortError) if a key does not fit the shared width.
/// No partial permutation is returned.
///
/// # Examples
///
/// ```
/// use trisort::trisort;
///
/// let data = vec!["dog", "cat", "cow"];
/// let indices = trisort(&data).unwrap();
///
/// assert_eq!(indices, vec![1, 2, 0]); // cat, cow, dog
/// ```
pub fn trisort<T: KeyAccessor + ?Sized>(provider: &T) -> Result<Vec<usize>> {
    trisort_with(provider, KeyLayout::Inferred)
}

/// Performs an index-based sort with an explicit [`KeyLayout`].
///
/// # Examples
///
/// ```
/// use trisort::{trisort_with, KeyLayout};
///
/// let data = vec!["banana", "apple", "app"];
/// let indices = trisort_with(&data, KeyLayout::Terminated).unwrap();
///
/// assert_eq!(indices, vec![2, 1, 0]); // app, apple, banana
/// ```
pub fn trisort_with<T: KeyAccessor + ?Sized>(provider: &T, layout: KeyLayout) -> Result<Vec<usize>> {
    if provider.is_empty() {
        return Ok(vec![]);
    }
    Ok(TrieSort::build(provider, layout)?.indices())
}

/// Sorts a mutable slice in-place.
///
/// This is a convenience wrapper for [`trisort`] which computes the sorted indices
/// and then applies the permutation to the slice. On error the slice is untouched.
///
/// # Examples
///
/// ```
/// use trisort::trisort_mut;
///
/// let mut data = vec!["dog", "cat", "cow"];
/// trisort_mut(&mut data).unwrap();
///
/// assert_eq!(data, vec!["cat", "cow", "dog"]);
/// ```
pub fn trisort_mut<T: AsRef<[u8]>>(data: &mut [T]) -> Result<()> {
    let indices = trisort(data)?;
    apply_permutation(data, indices);
    Ok(())
}

/// Moves `data[indices[k]]` to position `k` by following permutation cycles.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}

/// Counters gathered while building a trie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Keys inserted.
    pub keys: usize,
    /// Nodes allocated.
    pub nodes: usize,
    /// Symbols read across all keys, extensions included.
    pub symbols_read: usize,
    /// Bundles pushed one level down.
    pub extensions: usize,
    /// Deepest key position examined.
    pub max_depth: usize,
}

/// A completed trie over a collection, ready to be read out.
///
/// Building consumes no copies of the keys; the collection is only borrowed
/// for the duration of [`TrieSort::build`].
///
/// # Examples
///
/// ```
/// use trisort::{TrieSort, KeyLayout};
///
/// let data = ["aa", "ab", "aa"];
/// let sorted = TrieSort::build(&data, KeyLayout::Inferred).unwrap();
///
/// assert_eq!(sorted.indices(), vec![0, 2, 1]);
/// assert_eq!(sorted.iter().collect::<Vec<_>>(), sorted.indices());
/// ```
#[derive(Clone, Debug)]
pub struct TrieSort {
    store: TrieStore,
    stats: SortStats,
}

impl TrieSort {
    /// Inserts every key of `provider` into a fresh trie.
    ///
    /// Stops at the first failing key.
    pub fn build<T: KeyAccessor + ?Sized>(provider: &T, layout: KeyLayout) -> Result<Self> {
        let boundary = Boundary::resolve(provider, layout);
        let len = provider.len();
        debug!(keys = len, ?layout, ?boundary, "building trie");

        let mut store = TrieStore::new();
        let mut stats = SortStats {
            keys: len,
            ..SortStats::default()
        };

        {
            let mut inserter = Inserter::with_boundary(provider, &mut store, boundary);
            for index in 0..len {
                let placement = inserter.insert(index).inspect_err(|err| {
                    debug!(index, %err, "insertion failed");
                })?;
                stats.symbols_read += placement.symbols_read + placement.resident_reads;
                stats.extensions += placement.resident_reads;
                stats.max_depth = stats.max_depth.max(placement.depth);
            }
        }

        stats.nodes = store.len();
        debug!(?stats, "trie complete");
        Ok(Self { store, stats })
    }

    /// Lazily yields the sorted permutation.
    pub fn iter(&self) -> SortedIndices<'_> {
        SortedIndices::new(&self.store)
    }

    /// Returns the sorted permutation.
    pub fn indices(&self) -> Vec<usize> {
        self.iter().collect()
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn store(&self) -> &TrieStore {
        &self.store
    }
}

impl<'a> IntoIterator for &'a TrieSort {
    type Item = usize;
    type IntoIter = SortedIndices<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_permutation() {
        let mut data = vec!['d', 'c', 'o'];
        apply_permutation(&mut data, vec![1, 2, 0]);
        assert_eq!(data, vec!['c', 'o', 'd']);
    }

    #[test]
    fn test_stats_count_extension_reads() {
        let sorted = TrieSort::build(&["abcd", "abce"], KeyLayout::Inferred).unwrap();
        let stats = sorted.stats();

        // 1 read for the first key, 4 for the second, 3 resident reads while extending.
        assert_eq!(stats.symbols_read, 8);
        assert_eq!(stats.extensions, 3);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.keys, 2);
    }
}
