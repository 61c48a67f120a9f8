//! In-order read-out of a completed trie.
//!
//! Each node emits `left`, then its own entries, then `mid`, then `right`.
//! Entries of a node are emitted in arrival order, which makes the sort stable.

use crate::store::{NodeId, Tail, TrieStore};
use std::iter::FusedIterator;

enum Frame {
    Visit(NodeId),
    Emit(NodeId),
}

/// Lazy iterator over the sorted permutation held by a [`TrieStore`].
///
/// Uses an explicit stack, so deep tries (long shared prefixes) do not recurse.
/// Iterating the same store again yields the same sequence.
pub struct SortedIndices<'a> {
    store: &'a TrieStore,
    stack: Vec<Frame>,
    pending: std::slice::Iter<'a, usize>,
}

impl<'a> SortedIndices<'a> {
    pub fn new(store: &'a TrieStore) -> Self {
        Self {
            store,
            stack: store.root().map(Frame::Visit).into_iter().collect(),
            pending: [].iter(),
        }
    }
}

impl Iterator for SortedIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(&index) = self.pending.next() {
                return Some(index);
            }

            let store = self.store;
            match self.stack.pop()? {
                Frame::Emit(id) => {
                    self.pending = store.node(id).entries().iter();
                }
                Frame::Visit(id) => {
                    let node = store.node(id);
                    // Pushed in reverse of emission order.
                    if let Some(right) = node.right() {
                        self.stack.push(Frame::Visit(right));
                    }
                    match node.tail() {
                        Tail::Mid(mid) => self.stack.push(Frame::Visit(*mid)),
                        Tail::Entries(_) => self.stack.push(Frame::Emit(id)),
                    }
                    if let Some(left) = node.left() {
                        self.stack.push(Frame::Visit(left));
                    }
                }
            }
        }
    }
}

impl FusedIterator for SortedIndices<'_> {}

/// Reads the full sorted permutation out of `store`.
pub fn collect(store: &TrieStore) -> Vec<usize> {
    SortedIndices::new(store).collect()
}
