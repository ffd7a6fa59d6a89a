//! Flat membership set.
//!
//! Exact-match-or-not, with no notion of prefixes: every non-member is
//! reported as [`Lookup::ProperPrefix`] because the set cannot rule out that a
//! longer word starts with it. A search backed by a `WordSet` therefore never
//! prunes and walks every simple path in the grid.

use crate::Lookup;
use crate::error::Result;
use crate::lexicon::{Lexicon, load_words};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<Vec<u8>>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let set: WordSet = load_words(path)?.into_iter().collect();
        tracing::debug!(path = %path.display(), words = set.len(), "word set built");
        Ok(set)
    }

    /// Add `word`; returns `false` if it was already present. The empty word
    /// is ignored.
    pub fn insert(&mut self, word: impl Into<Vec<u8>>) -> bool {
        let word = word.into();
        !word.is_empty() && self.words.insert(word)
    }

    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        self.words.contains(word.as_ref())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<W: Into<Vec<u8>>> FromIterator<W> for WordSet {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut set = WordSet::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

impl Lexicon for WordSet {
    fn lookup(&self, query: &[u8]) -> Lookup {
        if query.is_empty() {
            Lookup::NotFound
        } else if self.words.contains(query) {
            Lookup::ExactWord
        } else {
            Lookup::ProperPrefix
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn prunes(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_are_exact_and_everything_else_is_a_prefix() {
        let set: WordSet = ["aa", "aah"].into_iter().collect();
        assert_eq!(set.lookup(b"aa"), Lookup::ExactWord);
        assert_eq!(set.lookup(b"aah"), Lookup::ExactWord);
        assert_eq!(set.lookup(b"a"), Lookup::ProperPrefix);
        assert_eq!(set.lookup(b"zzz"), Lookup::ProperPrefix);
        assert_eq!(set.lookup(b""), Lookup::NotFound);
        assert!(!set.prunes());
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = WordSet::new();
        assert!(set.insert("aa"));
        assert!(!set.insert("aa"));
        assert!(!set.insert(""));
        assert_eq!(set.len(), 1);
        assert!(set.contains("aa"));
    }
}
