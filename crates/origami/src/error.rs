//! Error taxonomy for loading, building and solving problems.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed count or coordinate literal in an input file.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Degenerate segment set (empty, or a zero-length segment).
    #[error("invalid arrangement: {0}")]
    InvalidArrangement(String),

    /// The search exhausted every branch.
    #[error("no solution found")]
    NoSolution,

    /// The search ran out of its time budget before exhausting the stack.
    #[error("search timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
