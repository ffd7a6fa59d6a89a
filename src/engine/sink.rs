//! Where found words go.
//!
//! The engine calls [`WordSink::emit`] synchronously, on its own stack, once
//! per discovered word and in discovery order. Any `FnMut(&[u8])` closure is a
//! sink, and so is a plain `Vec<Vec<u8>>`; [`FoundWords`] collects emissions
//! for later inspection.

pub trait WordSink {
    fn emit(&mut self, word: &[u8]);
}

impl<F: FnMut(&[u8])> WordSink for F {
    fn emit(&mut self, word: &[u8]) {
        self(word)
    }
}

impl WordSink for Vec<Vec<u8>> {
    fn emit(&mut self, word: &[u8]) {
        self.push(word.to_vec());
    }
}

/// Collects every emission, duplicates included, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    words: Vec<Vec<u8>>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(Vec::as_slice)
    }

    /// Emissions decoded as UTF-8, invalid sequences replaced.
    pub fn to_strings(&self) -> Vec<String> {
        self.words.iter().map(|w| String::from_utf8_lossy(w).into_owned()).collect()
    }

    /// How many times `word` was emitted.
    pub fn count_of(&self, word: impl AsRef<[u8]>) -> usize {
        let word = word.as_ref();
        self.words.iter().filter(|w| w.as_slice() == word).count()
    }

    pub fn into_inner(self) -> Vec<Vec<u8>> {
        self.words
    }
}

impl WordSink for FoundWords {
    fn emit(&mut self, word: &[u8]) {
        self.words.push(word.to_vec());
    }
}
