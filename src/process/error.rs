use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a whole pass.
#[derive(Debug, Error)]
pub enum PassError {
    #[error("file {} not found", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while converting rows: {0}")]
    Stream(#[from] std::io::Error),

    #[error("unexpected error at input line {line}: {source}")]
    Unexpected {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl PassError {
    /// Sort a `csv` error into the I/O bucket or the catch-all.
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        if !err.is_io_error() {
            let line = err.position().map(|p| p.line()).unwrap_or(0);
            return PassError::Unexpected { line, source: err };
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => PassError::Stream(io),
            other => PassError::Stream(std::io::Error::other(format!("{other:?}"))),
        }
    }
}

/// Row-local rejections. These never leave the row loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}")]
    Shape { expected: usize, found: usize },
}
