//! Find every dictionary word spelled by a path of adjacent grid cells.
//!
//! A path starts at any cell, moves to one of the (up to) eight surrounding
//! cells at each step, and never uses a cell twice. The word list is held in a
//! trie ([`Dictionary`]) that classifies any symbol sequence as a word, a
//! proper prefix of a word, or neither; the search ([`WordSearch`]) uses that
//! to abandon a path as soon as no word can start with it.
//!
//! ```
//! use wordgrid::{Dictionary, Grid, GridSize, Lookup, find_words};
//!
//! let dict = Dictionary::from_words(["aa", "aah", "aahed", "aal"]).unwrap();
//! assert_eq!(dict.lookup("aah"), Lookup::ExactWord);
//! assert_eq!(dict.lookup("aahe"), Lookup::ProperPrefix);
//! assert_eq!(dict.lookup("b"), Lookup::NotFound);
//!
//! let grid = Grid::new(GridSize::new(2, 2), "aahl").unwrap();
//! let found = find_words(&dict, &grid);
//! assert_eq!(found.count, found.words.len());
//! ```
//!
//! Symbols are raw bytes: no case folding, no alphabet checks.

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod grid;
mod lexicon;

pub use api::{
    LexiconKind, LoadedLexicon, Options, SearchReport, SearchResult, SolveDetails, find_words, find_words_verbose,
    find_words_with, solve,
};
pub use engine::{FoundWords, OriginMetrics, SearchMetrics, WordSearch, WordSink};
pub use error::{Error, Result};
pub use grid::{Cell, Direction, Grid, GridSize};
pub use lexicon::{Dictionary, DictionaryStats, Lexicon, WordLines, WordSet, load_words, open_word_list, read_words};

// --- Shared types -----------------------------------------------------------

/// Outcome of asking a lexicon about a symbol sequence.
///
/// None of these is an error: `NotFound` just means the path can be pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Neither a word nor the start of one.
    NotFound,
    /// An inserted word (it may also prefix longer words).
    ExactWord,
    /// Not a word itself, but some word starts with it.
    ProperPrefix,
}
