//! Search run metrics.
//!
//! `WordSearch::run` only counts emissions. `WordSearch::run_with_metrics`
//! additionally records what each origin's depth-first search did, which is
//! what the verbose CLI report prints.
//!
//! ## Design notes
//!
//! - `OriginMetrics::samples` may allocate and is only filled when
//!   `WORDGRID_DEBUG` is set.
//! - `paths` counts every path the engine looked up in the lexicon, including
//!   the pruned ones, so `paths - pruned` is the number of paths extended.

use crate::grid::Cell;
use std::time::Duration;

/// Totals for one full-grid search.
#[derive(Debug, Default, Clone)]
pub struct SearchMetrics {
    /// Elapsed time for the whole search.
    pub elapsed: Duration,
    /// Paths looked up in the lexicon.
    pub paths: usize,
    /// Paths the lexicon answered `NotFound` for.
    pub pruned: usize,
    /// Words handed to the sink.
    pub emitted: usize,
    /// Length of the longest emitted word.
    pub longest: usize,
    /// Per-origin breakdown, row-major.
    pub origins: Vec<OriginMetrics>,
}

/// Counters for the search rooted at one cell.
#[derive(Debug, Default, Clone)]
pub struct OriginMetrics {
    pub cell: Cell,
    pub duration: Duration,
    pub paths: usize,
    pub pruned: usize,
    pub emitted: usize,
    pub longest: usize,
    /// First few words found from this origin (debugging only).
    pub samples: Vec<String>,
}

impl SearchMetrics {
    pub(crate) fn absorb(&mut self, origin: OriginMetrics) {
        self.paths += origin.paths;
        self.pruned += origin.pruned;
        self.emitted += origin.emitted;
        self.longest = self.longest.max(origin.longest);
        self.origins.push(origin);
    }
}
