//! Word lists the search engine can consult.
//!
//! The engine only needs one question answered per path extension: is this
//! symbol sequence a word, the start of a longer word, or neither? That
//! question is the [`Lexicon`] trait. Two implementations live here:
//!
//! - [`Dictionary`] (`trie.rs`): a trie of per-depth sorted sibling chains with
//!   per-symbol child chains. Answers all three outcomes, so the search can
//!   prune dead branches early.
//! - [`WordSet`] (`word_set.rs`): a flat hash set. It can only tell exact
//!   members apart from everything else and reports every non-member as a
//!   prefix, so a search over it enumerates every path in the grid. Useful as a
//!   baseline, unusable beyond tiny grids.
//!
//! `loader.rs` reads the on-disk format shared by both: one word per line,
//! `\n` or `\r\n` terminated, bytes otherwise verbatim.
//!
//! ```text
//!  word list file ── WordLines (loader.rs) ──┬─▶ Dictionary::insert
//!                                            └─▶ WordSet::insert
//!                                                     │
//!                      engine::WordSearch ◀── Lexicon::lookup
//! ```

#[path = "lexicon/loader.rs"]
mod loader;
#[path = "lexicon/trie.rs"]
mod trie;
#[path = "lexicon/word_set.rs"]
mod word_set;

pub use loader::{WordLines, load_words, open_word_list, read_words};
pub use trie::{Dictionary, DictionaryStats};
pub use word_set::WordSet;

use crate::Lookup;

/// Three-way membership oracle consulted at every path extension.
///
/// Implementations must be total: any byte sequence, including the empty one,
/// yields a classification.
pub trait Lexicon {
    /// Classify `query` as a word, a proper prefix, or neither.
    fn lookup(&self, query: &[u8]) -> Lookup;

    /// Number of distinct words held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `lookup` can ever answer `NotFound` for a non-empty query.
    /// Lexicons that cannot prune make the search exhaustive.
    fn prunes(&self) -> bool {
        true
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn lookup(&self, query: &[u8]) -> Lookup {
        (**self).lookup(query)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn prunes(&self) -> bool {
        (**self).prunes()
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Box<L> {
    fn lookup(&self, query: &[u8]) -> Lookup {
        (**self).lookup(query)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn prunes(&self) -> bool {
        (**self).prunes()
    }
}
