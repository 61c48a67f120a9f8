//! Arena-backed ternary trie.
//!
//! The store owns every node and hands out [`NodeId`]s. Nodes never point back
//! to their parents; all traversal is top-down from [`TrieStore::root`].
//!
//! Structural mutation is crate-private: only the [`Inserter`](crate::insert::Inserter)
//! grows the trie, and it is responsible for keeping `left`/`right` ordered by symbol.

use crate::core::Symbol;
use crate::error::{Result, SortError};

/// Address of a node inside a [`TrieStore`].
///
/// Ids are 32 bits wide, so a single trie holds at most `u32::MAX + 1` nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Addresses arena slot `slot`, or `None` if it does not fit in an id.
    fn from_slot(slot: usize) -> Option<Self> {
        u32::try_from(slot).ok().map(NodeId)
    }

    #[inline(always)]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Same-depth branch of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    /// Symbols ordering below the node's symbol.
    Left,
    /// Symbols ordering above the node's symbol.
    Right,
}

/// What follows a node along its own symbol.
///
/// A node either still bundles the keys that reached it, or has been extended
/// and continues one position deeper. Never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tail {
    /// Keys matching the path to this node, in arrival order.
    Entries(Vec<usize>),
    /// Continuation at the next position.
    Mid(NodeId),
}

/// One trie vertex.
#[derive(Clone, Debug)]
pub struct Node {
    symbol: Symbol,
    left: Option<NodeId>,
    right: Option<NodeId>,
    tail: Tail,
}

impl Node {
    fn with_entries(symbol: Symbol, entries: Vec<usize>) -> Self {
        Self {
            symbol,
            left: None,
            right: None,
            tail: Tail::Entries(entries),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    /// Returns the continuation node, if this node has been extended.
    pub fn mid(&self) -> Option<NodeId> {
        match self.tail {
            Tail::Mid(mid) => Some(mid),
            Tail::Entries(_) => None,
        }
    }

    /// Returns the bundled keys, empty if this node has been extended.
    pub fn entries(&self) -> &[usize] {
        match &self.tail {
            Tail::Entries(entries) => entries,
            Tail::Mid(_) => &[],
        }
    }

    /// Returns the same-depth child on the given side.
    pub fn branch(&self, branch: Branch) -> Option<NodeId> {
        match branch {
            Branch::Left => self.left,
            Branch::Right => self.right,
        }
    }
}

/// Outcome of [`TrieStore::ensure_root`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Root {
    /// The trie was empty; the root now holds the key as its first entry.
    Created(NodeId),
    /// The root already existed and was left untouched.
    Existing(NodeId),
}

/// Owner of all trie nodes.
#[derive(Clone, Debug, Default)]
pub struct TrieStore {
    nodes: Vec<Node>,
}

impl TrieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root is always the first node allocated.
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.slot()]
    }

    /// Creates the root holding `symbol` and `index` if the trie is empty,
    /// otherwise returns the existing root.
    pub(crate) fn ensure_root(&mut self, symbol: Symbol, index: usize) -> Result<Root> {
        match self.root() {
            Some(root) => Ok(Root::Existing(root)),
            None => Ok(Root::Created(
                self.alloc(Node::with_entries(symbol, vec![index]))?,
            )),
        }
    }

    /// Hangs a fresh node holding `index` on the given side of `parent`.
    pub(crate) fn attach(
        &mut self,
        parent: NodeId,
        branch: Branch,
        symbol: Symbol,
        index: usize,
    ) -> Result<NodeId> {
        let child = self.alloc(Node::with_entries(symbol, vec![index]))?;
        let node = &mut self.nodes[parent.slot()];
        match branch {
            Branch::Left => node.left = Some(child),
            Branch::Right => node.right = Some(child),
        }
        Ok(child)
    }

    /// Moves the entries of `id` into a new `mid` child keyed by `symbol`.
    ///
    /// A node that already continues is left as it is and its existing `mid`
    /// is returned.
    pub(crate) fn extend(&mut self, id: NodeId, symbol: Symbol) -> Result<NodeId> {
        if let Some(existing) = self.nodes[id.slot()].mid() {
            return Ok(existing);
        }
        let child = self.next_id()?;
        let entries = match std::mem::replace(&mut self.nodes[id.slot()].tail, Tail::Mid(child)) {
            Tail::Entries(entries) => entries,
            // Extended nodes returned above.
            Tail::Mid(_) => Vec::new(),
        };
        self.nodes.push(Node::with_entries(symbol, entries));
        Ok(child)
    }

    /// Appends `index` to the entries of `id`.
    ///
    /// Returns `false` if the node has already been extended.
    pub(crate) fn push_entry(&mut self, id: NodeId, index: usize) -> bool {
        match &mut self.nodes[id.slot()].tail {
            Tail::Entries(entries) => {
                entries.push(index);
                true
            }
            Tail::Mid(_) => false,
        }
    }

    fn next_id(&self) -> Result<NodeId> {
        NodeId::from_slot(self.nodes.len()).ok_or(SortError::TrieFull {
            nodes: self.nodes.len(),
        })
    }

    fn alloc(&mut self, node: Node) -> Result<NodeId> {
        let id = self.next_id()?;
        self.nodes.push(node);
        Ok(id)
    }
}
