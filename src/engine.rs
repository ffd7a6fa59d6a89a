//! Grid search engine.
//!
//! This module is the entry point for the search. It is split into focused
//! submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! Grid ───────────┐
//!                 │  WordSearch::new                  (search.rs)
//! Lexicon ────────┘
//!                 │
//!                 v
//!       WordSearch::run / run_with_metrics
//!         - one DFS per origin cell, row-major
//!         - lookup at every path extension
//!         - prune on NotFound
//!         - emit on ExactWord ──▶ WordSink::emit     (sink.rs)
//!                 │
//!                 v
//!       emission count + SearchMetrics               (metrics.rs)
//! ```
//!
//! The lexicon is the only pruning mechanism. With a lexicon that never
//! answers `NotFound` (see `WordSet`) the search enumerates every simple path
//! of the grid, which is exponential in the number of cells.
//!
//! ## Responsibilities by module
//!
//! - `search.rs`: `WordSearch`, per-path state and the stack-driven DFS.
//! - `sink.rs`: the `WordSink` callback abstraction and the `FoundWords`
//!   collector.
//! - `metrics.rs`: optional counters and timings for runs and origins.
//!
//! ## Debugging
//!
//! Set `WORDGRID_DEBUG=1` to keep a few sample words per origin in the run
//! metrics (printed by `wordgrid --verbose`). Structured events are emitted via
//! `tracing` at `debug` (per origin) and `trace` (per pruned path).

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/search.rs"]
mod search;
#[path = "engine/sink.rs"]
mod sink;

pub use metrics::{OriginMetrics, SearchMetrics};
pub use search::WordSearch;
pub use sink::{FoundWords, WordSink};

use once_cell::sync::Lazy;

/// Whether `WORDGRID_DEBUG` was set when the engine first ran.
pub(crate) static DEBUG_SAMPLES: Lazy<bool> = Lazy::new(|| std::env::var_os("WORDGRID_DEBUG").is_some());
