use crate::engine::{FoundWords, SearchMetrics, WordSearch, WordSink};
use crate::error::Result;
use crate::grid::{Grid, GridSize};
use crate::lexicon::{Dictionary, DictionaryStats, Lexicon, WordSet};
use crate::Lookup;
use std::path::Path;
use std::time::{Duration, Instant};

/// Which word list representation to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexiconKind {
    /// Prefix-aware trie; prunes dead branches.
    #[default]
    Trie,
    /// Flat membership set; enumerates every path. Baseline only.
    Flat,
}

/// Options that affect how a grid is solved.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Grid dimensions. Default: 4x4.
    pub size: GridSize,
    /// Word list representation. Default: trie.
    pub lexicon: LexiconKind,
}

/// A word list loaded in one of the supported representations.
#[derive(Debug, Clone)]
pub enum LoadedLexicon {
    Trie(Dictionary),
    Flat(WordSet),
}

impl LoadedLexicon {
    /// Load the word list at `path` as `kind`.
    pub fn load(path: impl AsRef<Path>, kind: LexiconKind) -> Result<Self> {
        Ok(match kind {
            LexiconKind::Trie => LoadedLexicon::Trie(Dictionary::from_path(path)?),
            LexiconKind::Flat => LoadedLexicon::Flat(WordSet::from_path(path)?),
        })
    }

    pub fn kind(&self) -> LexiconKind {
        match self {
            LoadedLexicon::Trie(_) => LexiconKind::Trie,
            LoadedLexicon::Flat(_) => LexiconKind::Flat,
        }
    }

    /// Trie counters; `None` for the flat set.
    pub fn dictionary_stats(&self) -> Option<DictionaryStats> {
        match self {
            LoadedLexicon::Trie(dict) => Some(dict.stats()),
            LoadedLexicon::Flat(_) => None,
        }
    }
}

impl Lexicon for LoadedLexicon {
    fn lookup(&self, query: &[u8]) -> Lookup {
        match self {
            LoadedLexicon::Trie(dict) => Lexicon::lookup(dict, query),
            LoadedLexicon::Flat(set) => set.lookup(query),
        }
    }

    fn len(&self) -> usize {
        match self {
            LoadedLexicon::Trie(dict) => dict.len(),
            LoadedLexicon::Flat(set) => set.len(),
        }
    }

    fn prunes(&self) -> bool {
        match self {
            LoadedLexicon::Trie(dict) => dict.prunes(),
            LoadedLexicon::Flat(set) => set.prunes(),
        }
    }
}

/// Result from [`find_words`].
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Every emission in discovery order, duplicates included.
    pub words: FoundWords,
    /// Number of emissions.
    pub count: usize,
    /// Time spent searching.
    pub elapsed: Duration,
}

/// Result from [`find_words_verbose`].
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Every emission in discovery order, duplicates included.
    pub words: FoundWords,
    pub metrics: SearchMetrics,
}

/// Additional details returned by [`solve`].
#[derive(Debug, Clone)]
pub struct SolveDetails {
    pub grid: Grid,
    pub lexicon: LexiconKind,
    /// Distinct words in the loaded word list.
    pub lexicon_words: usize,
    /// Trie counters, when the trie was used.
    pub dictionary: Option<DictionaryStats>,
    /// Time spent reading the word list and building the lexicon.
    pub load: Duration,
    pub search: SearchMetrics,
    /// Total elapsed time.
    pub total: Duration,
}

/// Search `grid` and collect every emission.
///
/// # Example
/// ```
/// use wordgrid::{Dictionary, Grid, GridSize, find_words};
///
/// let dict = Dictionary::from_words(["AS", "ASD", "ASDF", "ASF"]).unwrap();
/// let grid = Grid::new(GridSize::new(2, 2), "ASDF").unwrap();
/// let out = find_words(&dict, &grid);
/// assert_eq!(out.count, 4);
/// assert_eq!(out.words.to_strings(), ["AS", "ASF", "ASD", "ASDF"]);
/// ```
pub fn find_words<L: Lexicon + ?Sized>(lexicon: &L, grid: &Grid) -> SearchResult {
    let mut words = FoundWords::new();
    let metrics = WordSearch::new(lexicon, grid).run_with_metrics(&mut words);
    SearchResult { words, count: metrics.emitted, elapsed: metrics.elapsed }
}

/// Search `grid`, streaming every emission into `sink`; returns the count.
pub fn find_words_with<L, S>(lexicon: &L, grid: &Grid, sink: &mut S) -> usize
where
    L: Lexicon + ?Sized,
    S: WordSink + ?Sized,
{
    WordSearch::new(lexicon, grid).run(sink)
}

/// Search `grid`, collecting every emission along with per-origin metrics.
pub fn find_words_verbose<L: Lexicon + ?Sized>(lexicon: &L, grid: &Grid) -> SearchReport {
    let mut words = FoundWords::new();
    let metrics = WordSearch::new(lexicon, grid).run_with_metrics(&mut words);
    SearchReport { words, metrics }
}

/// Build the grid from `grid` (row-major, exactly `options.size` cells), load
/// the word list at `word_list`, then search, streaming words into `sink`.
///
/// The grid is validated before the word list is touched, so a malformed grid
/// never costs a dictionary build.
pub fn solve<S: WordSink + ?Sized>(
    word_list: impl AsRef<Path>,
    grid: impl AsRef<[u8]>,
    options: &Options,
    sink: &mut S,
) -> Result<SolveDetails> {
    let total_start = Instant::now();
    let grid = Grid::new(options.size, grid)?;

    let load_start = Instant::now();
    let lexicon = LoadedLexicon::load(word_list, options.lexicon)?;
    let load = load_start.elapsed();

    let search = WordSearch::new(&lexicon, &grid).run_with_metrics(sink);

    Ok(SolveDetails {
        lexicon: lexicon.kind(),
        lexicon_words: lexicon.len(),
        dictionary: lexicon.dictionary_stats(),
        grid,
        load,
        search,
        total: total_start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn word_list(words: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file
    }

    #[test]
    fn find_words_collects_emissions() {
        let dict = Dictionary::from_words(["AS", "ASD", "ASDF", "ASF"]).unwrap();
        let grid = Grid::new(GridSize::new(2, 2), "ASDF").unwrap();
        let res = find_words(&dict, &grid);

        assert_eq!(res.count, 4);
        assert_eq!(res.words.len(), 4);
        assert!(res.elapsed >= Duration::ZERO);
    }

    #[test]
    fn find_words_with_streams_into_closure() {
        let dict = Dictionary::from_words(["AS", "ASD"]).unwrap();
        let grid = Grid::new(GridSize::new(2, 2), "ASDF").unwrap();
        let mut seen = Vec::new();
        let count = find_words_with(&dict, &grid, &mut |w: &[u8]| seen.push(w.to_vec()));

        assert_eq!(count, 2);
        assert_eq!(seen, vec![b"AS".to_vec(), b"ASD".to_vec()]);
    }

    #[test]
    fn find_words_verbose_reports_per_origin_counters() {
        let dict = Dictionary::from_words(["AS", "ASD", "ASDF", "ASF"]).unwrap();
        let grid = Grid::new(GridSize::new(2, 2), "ASDF").unwrap();
        let report = find_words_verbose(&dict, &grid);

        assert_eq!(report.words.to_strings(), ["AS", "ASF", "ASD", "ASDF"]);
        assert_eq!(report.metrics.emitted, 4);
        assert_eq!(report.metrics.longest, 4);
        assert_eq!(report.metrics.origins.len(), 4);
        // Only the 'A' origin finds anything.
        assert_eq!(report.metrics.origins[0].emitted, 4);
        assert!(report.metrics.origins[1..].iter().all(|o| o.emitted == 0));
        assert!(report.metrics.elapsed >= report.metrics.origins[0].duration);
    }

    #[test]
    fn solve_loads_and_searches() {
        let file = word_list(&["aa", "aah", "ha", "hah"]);
        let options = Options { size: GridSize::new(2, 2), ..Options::default() };
        let mut found = FoundWords::new();
        let details = solve(file.path(), "aahz", &options, &mut found).unwrap();

        assert_eq!(details.lexicon, LexiconKind::Trie);
        assert_eq!(details.lexicon_words, 4);
        assert_eq!(details.dictionary.map(|s| s.words), Some(4));
        assert_eq!(details.search.emitted, found.len());
        // a a / h z: aa twice, aah twice, ha twice
        assert_eq!(found.count_of("aa"), 2);
        assert_eq!(found.count_of("aah"), 2);
        assert_eq!(found.count_of("ha"), 2);
        assert_eq!(found.count_of("hah"), 0);
    }

    #[test]
    fn flat_lexicon_matches_trie() {
        let file = word_list(&["aa", "aah", "ha"]);
        let trie = Options { size: GridSize::new(2, 2), lexicon: LexiconKind::Trie };
        let flat = Options { lexicon: LexiconKind::Flat, ..trie.clone() };

        let mut by_trie = FoundWords::new();
        let mut by_flat = FoundWords::new();
        solve(file.path(), "aahz", &trie, &mut by_trie).unwrap();
        let details = solve(file.path(), "aahz", &flat, &mut by_flat).unwrap();

        assert_eq!(by_trie, by_flat);
        assert!(details.dictionary.is_none());
        assert_eq!(details.search.pruned, 0);
    }

    #[test]
    fn malformed_grid_is_rejected_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.list");
        let err = solve(&missing, "abc", &Options::default(), &mut FoundWords::new()).unwrap_err();
        assert!(matches!(err, Error::MalformedGrid { expected: 16, actual: 3 }));
    }

    #[test]
    fn missing_word_list_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.list");
        let err = solve(&missing, "abcdefghijklmnop", &Options::default(), &mut FoundWords::new()).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound { .. }));
    }
}
