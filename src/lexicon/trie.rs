//! Character trie with sorted sibling chains.
//!
//! Each node holds one symbol at one depth. Alternatives at the same depth
//! form a singly linked *sibling* chain; the next depth hangs off a node's
//! *child* link. For the words `aa aah aahed aahing aahs aal aalii aaliis`
//! (`.` marks a node that ends a word, `->` is a child link, `|` a sibling
//! link):
//!
//! ```text
//! root -> a -> a. -> h. -> e -> d.
//!                    |     |
//!                    |     i -> n -> g.
//!                    |     |
//!                    |     s.
//!                    |
//!                    l. -> i -> i. -> s.
//! ```
//!
//! ## Invariants
//!
//! - Every sibling chain is strictly ascending by symbol, with no duplicates.
//!   Scans stop as soon as they pass a larger symbol; lookups rely on this.
//! - A node may end a word and still have children (`aa` and `aah`).
//! - Nodes live in an arena (`Dictionary::nodes`) and are addressed by
//!   `NodeId`. Each node is linked from exactly one place: the root slot, a
//!   parent's `child`, or a predecessor's `sibling`.
//!
//! Allocation goes through `Vec::try_reserve`, so running out of memory is an
//! [`Error::Allocation`] instead of an abort. A failed insert leaves every
//! node linked before the failure in place and queryable.

use crate::Lookup;
use crate::error::{Error, Result};
use crate::lexicon::{Lexicon, open_word_list};
use std::cmp::Ordering;
use std::path::Path;

/// Node identifier (index into `Dictionary::nodes`).
type NodeId = usize;

#[derive(Debug, Clone)]
struct TrieNode {
    symbol: u8,
    is_word: bool,
    child: Option<NodeId>,
    sibling: Option<NodeId>,
}

/// Counters kept alongside the trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Distinct words inserted.
    pub words: usize,
    /// Nodes allocated over the dictionary's lifetime.
    pub allocated_nodes: usize,
    /// Nodes torn down by [`Dictionary::release`].
    pub released_nodes: usize,
}

/// Prefix-queryable word list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    nodes: Vec<TrieNode>,
    /// Head of the depth-0 sibling chain.
    root: Option<NodeId>,
    stats: DictionaryStats,
    /// Arena size at which `alloc` reports exhaustion.
    #[cfg(test)]
    node_limit: Option<usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from in-memory words.
    pub fn from_words<I>(words: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut dict = Dictionary::new();
        for word in words {
            dict.insert(word)?;
        }
        Ok(dict)
    }

    /// Build a dictionary from a word list file, one word per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut dict = Dictionary::new();
        for word in open_word_list(path)? {
            dict.insert(word?)?;
        }
        tracing::debug!(
            path = %path.display(),
            words = dict.stats.words,
            nodes = dict.stats.allocated_nodes,
            "dictionary built"
        );
        Ok(dict)
    }

    /// Add `word`, creating nodes only for symbols not already on its path.
    ///
    /// ```text
    /// insert "aal" into  a -> a. -> h.
    ///
    ///   depth 0: 'a' matches          reuse
    ///   depth 1: 'a' matches          reuse
    ///   depth 2: 'h' < 'l', chain end splice after 'h'
    ///
    /// result:            a -> a. -> h.
    ///                               |
    ///                               l.
    /// ```
    ///
    /// Inserting an existing word is a no-op; inserting a prefix of an
    /// existing word only flags its last node. The empty word carries no
    /// symbols and is ignored.
    pub fn insert(&mut self, word: impl AsRef<[u8]>) -> Result<()> {
        let mut current: Option<NodeId> = None;
        for &symbol in word.as_ref() {
            current = Some(self.find_or_link(current, symbol)?);
        }

        if let Some(last) = current {
            let node = &mut self.nodes[last];
            if !node.is_word {
                node.is_word = true;
                self.stats.words += 1;
            }
        }
        Ok(())
    }

    /// Classify `query` against the trie without mutating it.
    ///
    /// The empty query matches no node and is `NotFound`.
    pub fn lookup(&self, query: impl AsRef<[u8]>) -> Lookup {
        let Some((&last, prefix)) = query.as_ref().split_last() else {
            return Lookup::NotFound;
        };

        let mut chain = self.root;
        for &symbol in prefix {
            match self.find(chain, symbol) {
                Some(id) => chain = self.nodes[id].child,
                None => return Lookup::NotFound,
            }
        }

        match self.find(chain, last) {
            Some(id) if self.nodes[id].is_word => Lookup::ExactWord,
            Some(_) => Lookup::ProperPrefix,
            None => Lookup::NotFound,
        }
    }

    /// `true` if `word` was inserted.
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        self.lookup(word) == Lookup::ExactWord
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.stats.words
    }

    pub fn is_empty(&self) -> bool {
        self.stats.words == 0
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn stats(&self) -> DictionaryStats {
        self.stats
    }

    /// Tear the trie down and return how many nodes were released.
    ///
    /// Nodes are visited children before siblings, each exactly once, and the
    /// count is added to [`DictionaryStats::released_nodes`]. The dictionary
    /// is empty (but usable) afterwards.
    pub fn release(&mut self) -> usize {
        let mut released = 0;
        let mut stack: Vec<NodeId> = self.root.take().into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id];
            // Sever both links before the node counts as gone.
            let (child, sibling) = (node.child.take(), node.sibling.take());
            released += 1;
            // Sibling pushed first so the child subtree is torn down before it.
            stack.extend(sibling);
            stack.extend(child);
        }

        debug_assert_eq!(released, self.nodes.len(), "trie nodes unreachable from the root");
        self.nodes.clear();
        self.stats.words = 0;
        self.stats.released_nodes += released;
        released
    }

    /// Scan the sibling chain starting at `cursor` for `symbol`.
    fn find(&self, mut cursor: Option<NodeId>, symbol: u8) -> Option<NodeId> {
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match node.symbol.cmp(&symbol) {
                Ordering::Equal => return Some(id),
                Ordering::Less => cursor = node.sibling,
                Ordering::Greater => return None,
            }
        }
        None
    }

    /// Find `symbol` in the chain under `parent` (the root chain when `None`),
    /// splicing in a new node at its sorted position if it is missing.
    fn find_or_link(&mut self, parent: Option<NodeId>, symbol: u8) -> Result<NodeId> {
        let head = match parent {
            Some(p) => self.nodes[p].child,
            None => self.root,
        };

        let mut prev: Option<NodeId> = None;
        let mut cursor = head;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match node.symbol.cmp(&symbol) {
                Ordering::Equal => return Ok(id),
                Ordering::Less => {
                    prev = Some(id);
                    cursor = node.sibling;
                }
                Ordering::Greater => break,
            }
        }

        // Head, middle and tail insertion differ only in who links to the new
        // node; the new node always links to `cursor`.
        let id = self.alloc(symbol, cursor)?;
        match (prev, parent) {
            (Some(p), _) => self.nodes[p].sibling = Some(id),
            (None, Some(p)) => self.nodes[p].child = Some(id),
            (None, None) => self.root = Some(id),
        }
        Ok(id)
    }

    fn alloc(&mut self, symbol: u8, sibling: Option<NodeId>) -> Result<NodeId> {
        #[cfg(test)]
        if self.node_limit.is_some_and(|limit| self.nodes.len() >= limit) {
            return Err(Error::Allocation { nodes: self.nodes.len() });
        }
        self.nodes.try_reserve(1).map_err(|_| Error::Allocation { nodes: self.nodes.len() })?;
        let id = self.nodes.len();
        self.nodes.push(TrieNode { symbol, is_word: false, child: None, sibling });
        self.stats.allocated_nodes += 1;
        Ok(id)
    }
}

impl Lexicon for Dictionary {
    fn lookup(&self, query: &[u8]) -> Lookup {
        Dictionary::lookup(self, query)
    }

    fn len(&self) -> usize {
        Dictionary::len(self)
    }
}
