//! Error types for wordgrid.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures surfaced by the dictionary builders and grid
/// constructors. Pruning and "no match" are ordinary results, not errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A trie node could not be allocated; the dictionary keeps every node
    /// linked before the failure and stays queryable.
    #[error("out of memory: could not allocate trie node (allocated so far: {nodes})")]
    Allocation { nodes: usize },

    /// The word list file does not exist.
    #[error("can't open file: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Any other failure while reading the word list.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Grid string does not hold exactly rows * cols symbols.
    #[error("grid must be {expected} characters long, got {actual}")]
    MalformedGrid { expected: usize, actual: usize },

    /// Grid dimensions that are zero or could not be parsed.
    #[error("invalid grid size: {0}")]
    InvalidSize(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::SourceNotFound { path }
        } else {
            Error::Io { path, source }
        }
    }
}
