//! Lazy placement of keys into the trie.
//!
//! A key is read one symbol per trie level and only as deep as needed to tell
//! it apart from the keys already stored. Keys sharing a node stay bundled in
//! that node's entries until a newcomer with the same symbol arrives; only
//! then is the bundle pushed one level down (an *extension*) and the comparison
//! resumed at the next position.

use crate::core::{KeyAccessor, KeyLayout, Symbol};
use crate::error::{Result, SortError};
use crate::store::{Branch, NodeId, Root, Tail, TrieStore};
use std::cmp::Ordering;
use tracing::trace;

/// Resolved length policy of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// Every key is compared up to `width` positions; `width` is non-zero.
    Fixed { width: usize },
    /// Keys end at their own length.
    Terminated,
}

impl Boundary {
    pub(crate) fn resolve<K: KeyAccessor + ?Sized>(keys: &K, layout: KeyLayout) -> Self {
        let width = match layout {
            KeyLayout::Terminated => return Boundary::Terminated,
            KeyLayout::Fixed(width) => width,
            KeyLayout::Inferred if keys.is_empty() => return Boundary::Terminated,
            KeyLayout::Inferred => keys.key_len(0),
        };

        // Zero-width keys are all empty, which the terminated walk handles directly.
        if width == 0 {
            Boundary::Terminated
        } else {
            Boundary::Fixed { width }
        }
    }

    /// True when a matching symbol at `depth` leaves nothing further to compare.
    #[inline(always)]
    fn is_terminal(self, symbol: Symbol, depth: usize) -> bool {
        match self {
            Boundary::Fixed { width } => depth + 1 == width,
            Boundary::Terminated => symbol.is_end(),
        }
    }
}

/// Where and at what cost a key was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Node that received the key at insertion time.
    ///
    /// Only valid until the next insertion: a later extension can move the
    /// key one level down, leaving this node without entries.
    pub node: NodeId,
    /// Trie depth (key position) of that node.
    pub depth: usize,
    /// Symbols read from the inserted key.
    pub symbols_read: usize,
    /// Symbols read from resident keys while extending bundles, one per extension.
    pub resident_reads: usize,
}

/// Places keys of a collection into a [`TrieStore`].
///
/// Keys are addressed by index; the collection is only ever read.
pub struct Inserter<'k, 's, K: KeyAccessor + ?Sized> {
    keys: &'k K,
    store: &'s mut TrieStore,
    boundary: Boundary,
}

impl<'k, 's, K: KeyAccessor + ?Sized> Inserter<'k, 's, K> {
    pub fn new(keys: &'k K, store: &'s mut TrieStore, layout: KeyLayout) -> Self {
        let boundary = Boundary::resolve(keys, layout);
        Self::with_boundary(keys, store, boundary)
    }

    pub(crate) fn with_boundary(keys: &'k K, store: &'s mut TrieStore, boundary: Boundary) -> Self {
        Self {
            keys,
            store,
            boundary,
        }
    }

    /// Places the key at `index`.
    ///
    /// On error the key is not placed. The trie may still have been extended
    /// on behalf of other keys, so a failed run should be discarded.
    pub fn insert(&mut self, index: usize) -> Result<Placement> {
        if let Boundary::Fixed { width } = self.boundary {
            let len = self.keys.key_len(index);
            if len > width {
                return Err(SortError::KeyTooLong { index, len, width });
            }
        }

        let mut depth = 0;
        let mut symbols_read = 1;
        let mut resident_reads = 0;
        let mut symbol = self.symbol(index, depth)?;

        let mut current = match self.store.ensure_root(symbol, index)? {
            Root::Created(node) => {
                return Ok(Placement {
                    node,
                    depth,
                    symbols_read,
                    resident_reads,
                });
            }
            Root::Existing(root) => root,
        };

        loop {
            let node = self.store.node(current);
            let branch = match symbol.cmp(&node.symbol()) {
                Ordering::Less => Branch::Left,
                Ordering::Greater => Branch::Right,
                Ordering::Equal => {
                    if self.boundary.is_terminal(symbol, depth) {
                        self.store.push_entry(current, index);
                        return Ok(Placement {
                            node: current,
                            depth,
                            symbols_read,
                            resident_reads,
                        });
                    }

                    current = match node.tail() {
                        Tail::Mid(mid) => *mid,
                        Tail::Entries(entries) => {
                            // Bundled keys agree through `depth + 1`, so the first one keys the extension.
                            let resident = entries[0];
                            let next = self.symbol(resident, depth + 1)?;
                            resident_reads += 1;
                            trace!(node = ?current, depth, resident, incoming = index, "extending bundle");
                            self.store.extend(current, next)?
                        }
                    };
                    depth += 1;
                    symbol = self.symbol(index, depth)?;
                    symbols_read += 1;
                    continue;
                }
            };

            current = match node.branch(branch) {
                Some(child) => child,
                None => {
                    let node = self.store.attach(current, branch, symbol, index)?;
                    return Ok(Placement {
                        node,
                        depth,
                        symbols_read,
                        resident_reads,
                    });
                }
            };
        }
    }

    /// Reads one position of a key under the run's length policy.
    #[inline(always)]
    fn symbol(&self, index: usize, position: usize) -> Result<Symbol> {
        match self.keys.symbol_at(index, position) {
            Some(byte) => Ok(Symbol::byte(byte)),
            None => {
                let len = self.keys.key_len(index);
                match self.boundary {
                    Boundary::Terminated if position == len => Ok(Symbol::END),
                    _ => Err(SortError::CharacterOutOfRange {
                        index,
                        position,
                        len,
                    }),
                }
            }
        }
    }
}
