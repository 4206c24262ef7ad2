//! trie.rs
//! Encoder-side prefix trie.
//!
//! Design notes:
//! - Nodes live in an arena (`Vec`) and are addressed by `NodeId`; the root is
//!   always slot 0 and holds `EMPTY_CODE`.
//! - Child links are kept sparse in one map keyed by `(parent, symbol)`, so a
//!   node costs a single `Code` instead of a 256-slot array.
//! - Reset truncates the arena back to the root and clears the links; no
//!   recursive teardown, so deep tries cannot exhaust the stack.

use std::collections::HashMap;

use crate::code::{Code, EMPTY_CODE};

/// Handle to a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn link_key(self, sym: u8) -> u32 {
        (self.0 << 8) | sym as u32
    }
}

#[derive(Debug, Clone, Copy)]
struct TrieNode {
    code: Code,
}

/// Prefix trie of every sequence the encoder has learned since the last reset.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    children: HashMap<u32, NodeId>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// A trie holding only the empty-sequence root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode { code: EMPTY_CODE }],
            children: HashMap::new(),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Child of `node` reached by `sym`, if that sequence has been learned.
    #[inline]
    pub fn step(&self, node: NodeId, sym: u8) -> Option<NodeId> {
        self.children.get(&node.link_key(sym)).copied()
    }

    /// Attach a new child under `node` for `sym`, carrying `code`.
    ///
    /// A sequence is learned exactly once; inserting an existing link is a
    /// logic error in the caller.
    pub fn insert(&mut self, node: NodeId, sym: u8, code: Code) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode { code });
        let prev = self.children.insert(node.link_key(sym), id);
        debug_assert!(prev.is_none(), "sequence learned twice");
        id
    }

    /// Code carried by `node`.
    #[inline]
    pub fn code(&self, node: NodeId) -> Code {
        self.nodes[node.0 as usize].code
    }

    /// Drop every node except the root.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        self.children.clear();
    }

    /// Nodes in the trie, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root is left.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}
