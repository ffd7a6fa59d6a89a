//! Prefix-pruned depth-first grid search.
//!
//! Every cell of the grid is the origin of an independent depth-first search.
//! A path is a word-so-far, the cell it ended on, and the set of cells it has
//! used. At each path the lexicon is asked about the word-so-far:
//!
//! ```text
//!            lookup(word)
//!   NotFound ─────────────▶ prune (no extension can match)
//!   ProperPrefix ─────────▶ extend
//!   ExactWord ────────────▶ emit, then extend
//!
//!   extend: for each neighbor, clockwise from north,
//!           skip it if the path already used it,
//!           otherwise child = word + symbol, mask + neighbor
//! ```
//!
//! ## Ordering
//!
//! The DFS is driven by an explicit stack instead of recursion. Children are
//! pushed in reverse neighbor order so the LIFO pops them clockwise, which
//! yields exactly the pre-order a recursive walk would produce. Emission order
//! is therefore fully determined by the grid, the lexicon and the neighbor
//! order.
//!
//! ## Visited masks
//!
//! Each pending path owns its own `VisitedMask`, copied from its parent with
//! one more bit set. Siblings never observe each other's marks, so nothing
//! has to be undone when a branch finishes.
//!
//! ## Duplicates
//!
//! No deduplication happens: two different paths spelling the same word emit
//! it twice and both emissions count.

use super::metrics::{OriginMetrics, SearchMetrics};
use super::sink::WordSink;
use crate::Lookup;
use crate::grid::{Cell, Grid};
use crate::lexicon::Lexicon;
use std::time::Instant;

/// How many words per origin are kept as samples when `WORDGRID_DEBUG` is set.
const SAMPLES_PER_ORIGIN: usize = 8;

/// One bit per grid cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisitedMask {
    bits: Vec<u64>,
}

impl VisitedMask {
    pub(crate) fn new(cells: usize) -> Self {
        VisitedMask { bits: vec![0; cells.div_ceil(64)] }
    }

    pub(crate) fn mark(&mut self, index: usize) {
        self.bits[index / 64] |= 1 << (index % 64);
    }

    pub(crate) fn is_marked(&self, index: usize) -> bool {
        self.bits[index / 64] & (1 << (index % 64)) != 0
    }

    pub(crate) fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// An in-progress path.
#[derive(Debug, Clone)]
struct SearchPath {
    word: Vec<u8>,
    cell: Cell,
    visited: VisitedMask,
}

impl SearchPath {
    fn origin(grid: &Grid, cell: Cell) -> Self {
        let mut visited = VisitedMask::new(grid.size().cells());
        visited.mark(grid.index(cell));
        SearchPath { word: vec![grid.at(cell)], cell, visited }
    }

    /// Child path stepping onto `next`, with its own copy of the mask.
    fn extend(&self, grid: &Grid, next: Cell) -> Self {
        let mut word = Vec::with_capacity(self.word.len() + 1);
        word.extend_from_slice(&self.word);
        word.push(grid.at(next));

        let mut visited = self.visited.clone();
        visited.mark(grid.index(next));
        SearchPath { word, cell: next, visited }
    }
}

/// Full-grid word search over a lexicon.
///
/// Usage: create with `WordSearch::new(&lexicon, &grid)` then call
/// `run(&mut sink)`. The lexicon is only read.
#[derive(Debug)]
pub struct WordSearch<'a, L: ?Sized> {
    lexicon: &'a L,
    grid: &'a Grid,
    /// Emissions of the current (or last) run.
    found: usize,
}

impl<'a, L: Lexicon + ?Sized> WordSearch<'a, L> {
    pub fn new(lexicon: &'a L, grid: &'a Grid) -> Self {
        WordSearch { lexicon, grid, found: 0 }
    }

    /// Number of emissions of the last run.
    pub fn found_count(&self) -> usize {
        self.found
    }

    /// Search the whole grid, handing every found word to `sink`, and return
    /// the number of emissions.
    pub fn run<S: WordSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        self.run_with_metrics(sink).emitted
    }

    /// Search the whole grid and return per-origin counters and timings.
    pub fn run_with_metrics<S: WordSink + ?Sized>(&mut self, sink: &mut S) -> SearchMetrics {
        let total_start = Instant::now();
        let mut metrics = SearchMetrics::default();
        self.found = 0;

        if !self.lexicon.prunes() {
            tracing::warn!(
                cells = self.grid.size().cells(),
                "lexicon cannot prune prefixes, every path in the grid will be enumerated"
            );
        }

        for origin in self.grid.cells() {
            let origin_metrics = self.explore(origin, sink);
            tracing::debug!(
                row = origin.row,
                col = origin.col,
                paths = origin_metrics.paths,
                emitted = origin_metrics.emitted,
                found = self.found,
                "origin searched"
            );
            metrics.absorb(origin_metrics);
        }

        metrics.elapsed = total_start.elapsed();
        metrics
    }

    /// Depth-first search of every path starting at `origin`.
    fn explore<S: WordSink + ?Sized>(&mut self, origin: Cell, sink: &mut S) -> OriginMetrics {
        let start = Instant::now();
        let debug = *super::DEBUG_SAMPLES;
        let mut metrics = OriginMetrics { cell: origin, ..OriginMetrics::default() };
        let mut stack = vec![SearchPath::origin(self.grid, origin)];

        while let Some(path) = stack.pop() {
            debug_assert_eq!(path.word.len(), path.visited.count(), "path reused a cell");
            metrics.paths += 1;

            match self.lexicon.lookup(&path.word) {
                Lookup::NotFound => {
                    metrics.pruned += 1;
                    tracing::trace!(len = path.word.len(), "prefix pruned");
                    continue;
                }
                Lookup::ExactWord => {
                    sink.emit(&path.word);
                    self.found += 1;
                    metrics.emitted += 1;
                    metrics.longest = metrics.longest.max(path.word.len());
                    if debug && metrics.samples.len() < SAMPLES_PER_ORIGIN {
                        metrics.samples.push(String::from_utf8_lossy(&path.word).into_owned());
                    }
                }
                Lookup::ProperPrefix => {}
            }

            // Push in reverse so neighbors are explored clockwise (stack is LIFO).
            for next in self.grid.neighbors_of(path.cell).rev() {
                if !path.visited.is_marked(self.grid.index(next)) {
                    stack.push(path.extend(self.grid, next));
                }
            }
        }

        metrics.duration = start.elapsed();
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FoundWords;
    use crate::grid::GridSize;
    use crate::lexicon::{Dictionary, WordSet};
    use std::collections::HashMap;

    fn grid(rows: usize, cols: usize, symbols: &str) -> Grid {
        Grid::new(GridSize::new(rows, cols), symbols).unwrap()
    }

    fn search<L: Lexicon + ?Sized>(lexicon: &L, grid: &Grid) -> (FoundWords, SearchMetrics) {
        let mut found = FoundWords::new();
        let metrics = WordSearch::new(lexicon, grid).run_with_metrics(&mut found);
        (found, metrics)
    }

    /// Every distinct-symbol sequence over `symbols`, lengths 1..=len.
    fn all_arrangements(symbols: &[u8]) -> Vec<Vec<u8>> {
        fn walk(symbols: &[u8], used: &mut Vec<bool>, word: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
            for (idx, &sym) in symbols.iter().enumerate() {
                if used[idx] {
                    continue;
                }
                used[idx] = true;
                word.push(sym);
                out.push(word.clone());
                walk(symbols, used, word, out);
                word.pop();
                used[idx] = false;
            }
        }
        let mut out = Vec::new();
        walk(symbols, &mut vec![false; symbols.len()], &mut Vec::new(), &mut out);
        out
    }

    /// Brute force: every simple path in the grid, counted by the word it spells.
    fn path_words(grid: &Grid) -> HashMap<Vec<u8>, usize> {
        fn walk(grid: &Grid, cell: Cell, used: &mut Vec<bool>, word: &mut Vec<u8>, out: &mut HashMap<Vec<u8>, usize>) {
            *out.entry(word.clone()).or_default() += 1;
            for next in grid.neighbors_of(cell) {
                let idx = grid.index(next);
                if used[idx] {
                    continue;
                }
                used[idx] = true;
                word.push(grid.at(next));
                walk(grid, next, used, word, out);
                word.pop();
                used[idx] = false;
            }
        }
        let mut out = HashMap::new();
        for origin in grid.cells() {
            let mut used = vec![false; grid.size().cells()];
            used[grid.index(origin)] = true;
            walk(grid, origin, &mut used, &mut vec![grid.at(origin)], &mut out);
        }
        out
    }

    #[test]
    fn asdf_worked_example() {
        // A S
        // D F
        let grid = grid(2, 2, "ASDF");
        let dict = Dictionary::from_words(["AS", "ASD", "ASDF", "ASF"]).unwrap();
        let (found, metrics) = search(&dict, &grid);

        // From S, south (F) comes before south-west (D).
        assert_eq!(found.to_strings(), vec!["AS", "ASF", "ASD", "ASDF"]);
        assert_eq!(metrics.emitted, 4);
        assert_eq!(metrics.longest, 4);
        // A AS ASF ASFD ASD ASDF AF AD, then S D F pruned immediately.
        assert_eq!(metrics.paths, 11);
        assert_eq!(metrics.pruned, 6);
        assert_eq!(metrics.origins.len(), 4);
        assert_eq!(metrics.origins[0].emitted, 4);
    }

    #[test]
    fn run_returns_count_and_resets_between_runs() {
        let grid = grid(2, 2, "ASDF");
        let dict = Dictionary::from_words(["AS", "ASD", "ASDF", "ASF"]).unwrap();
        let mut engine = WordSearch::new(&dict, &grid);

        let mut seen = Vec::new();
        assert_eq!(engine.run(&mut |w: &[u8]| seen.push(w.to_vec())), 4);
        assert_eq!(engine.found_count(), 4);
        assert_eq!(engine.run(&mut |_: &[u8]| {}), 4);
        assert_eq!(engine.found_count(), 4);
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn same_word_on_distinct_paths_is_emitted_each_time() {
        let grid = grid(2, 2, "AAAA");
        let dict = Dictionary::from_words(["AA"]).unwrap();
        let (found, metrics) = search(&dict, &grid);

        // Every ordered pair of distinct cells is adjacent in a 2x2 grid.
        assert_eq!(found.count_of("AA"), 12);
        assert_eq!(metrics.emitted, 12);
    }

    #[test]
    fn visited_marks_do_not_leak_across_siblings() {
        // All 64 simple paths of a 2x2 grid spell distinct words; losing any one
        // of them would mean a finished branch left a mark behind.
        let grid = grid(2, 2, "ABCD");
        let words = all_arrangements(b"ABCD");
        assert_eq!(words.len(), 64);
        let dict = Dictionary::from_words(&words).unwrap();

        let (found, _) = search(&dict, &grid);
        assert_eq!(found.len(), 64);
        let mut got = found.into_inner();
        got.sort();
        let mut expected = words;
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn sibling_branch_can_reuse_cell_of_returned_sibling_but_not_its_own() {
        // A B C
        // D E F
        // G H I
        let grid = grid(3, 3, "ABCDEFGHI");
        let dict = Dictionary::from_words(["EAB", "EBA", "EBAE", "ABA", "EB"]).unwrap();
        let (found, _) = search(&dict, &grid);

        // From E: north (B) precedes north-west (A).
        assert_eq!(found.to_strings(), vec!["EB", "EBA", "EAB"]);
    }

    #[test]
    fn paths_never_reuse_a_cell() {
        let grid = grid(3, 3, "ABCDEFGHI");
        let words = ["ABEDA", "ABE", "EFIHE", "EFIH", "IEAI", "CBA", "GHIFCBADE", "GHIFCBADEH"];
        let dict = Dictionary::from_words(words).unwrap();
        let (found, _) = search(&dict, &grid);

        for word in found.iter() {
            let mut symbols = word.to_vec();
            symbols.sort();
            symbols.dedup();
            assert_eq!(symbols.len(), word.len(), "{:?}", String::from_utf8_lossy(word));
        }
        assert_eq!(found.to_strings(), vec!["ABE", "CBA", "EFIH", "GHIFCBADE"]);
    }

    #[test]
    fn emissions_match_brute_force_path_enumeration() {
        let grid = grid(2, 3, "TEAEAT");
        let words = ["TEA", "EAT", "ATE", "ETA", "TA", "AT", "TEAT", "EATEN", "TATE", "A", "TAE", "EE"];
        let dict = Dictionary::from_words(words).unwrap();
        let (found, metrics) = search(&dict, &grid);

        let paths = path_words(&grid);
        let mut expected: HashMap<Vec<u8>, usize> = HashMap::new();
        for word in words {
            if let Some(&n) = paths.get(word.as_bytes()) {
                expected.insert(word.as_bytes().to_vec(), n);
            }
        }
        let mut got: HashMap<Vec<u8>, usize> = HashMap::new();
        for word in found.iter() {
            *got.entry(word.to_vec()).or_default() += 1;
        }

        assert_eq!(got, expected);
        assert_eq!(metrics.emitted, expected.values().sum::<usize>());
        assert!(!got.contains_key(b"EATEN".as_slice()));
    }

    #[test]
    fn flat_baseline_finds_the_same_words_in_the_same_order() {
        let grid = grid(2, 2, "ASDF");
        let words = ["AS", "ASD", "ASDF", "ASF", "FDSA", "SF"];
        let dict = Dictionary::from_words(words).unwrap();
        let set: WordSet = words.into_iter().collect();

        let (trie_found, trie_metrics) = search(&dict, &grid);
        let (flat_found, flat_metrics) = search(&set, &grid);

        assert_eq!(trie_found, flat_found);
        assert_eq!(flat_metrics.pruned, 0);
        // Every simple path of a 2x2 grid gets looked up.
        assert_eq!(flat_metrics.paths, 64);
        assert!(trie_metrics.paths < flat_metrics.paths);
    }

    #[test]
    fn empty_lexicon_prunes_every_origin() {
        let grid = grid(2, 2, "ASDF");
        let (found, metrics) = search(&Dictionary::new(), &grid);
        assert!(found.is_empty());
        assert_eq!(metrics.paths, 4);
        assert_eq!(metrics.pruned, 4);
    }

    #[test]
    fn single_symbol_words_are_found() {
        let grid = grid(1, 3, "aba");
        let dict = Dictionary::from_words(["a", "ab", "ba"]).unwrap();
        let (found, _) = search(&dict, &grid);
        // (0,0): a, ab; (0,1): ba (east), ba (west); (0,2): a, ab
        assert_eq!(found.to_strings(), vec!["a", "ab", "ba", "ba", "a", "ab"]);
    }

    #[test]
    fn visited_mask_spans_multiple_words() {
        let mut mask = VisitedMask::new(130);
        mask.mark(0);
        mask.mark(64);
        mask.mark(129);
        assert!(mask.is_marked(64));
        assert!(!mask.is_marked(63));
        assert!(mask.is_marked(129));
        assert_eq!(mask.count(), 3);
    }
}
