//! Error types for pkgup

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using pkgup Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during an upward search.
///
/// Not finding anything is not an error: searches return `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory was needed to resolve the start but could not be read.
    #[error("Failed to read current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// A candidate could not be checked and the search runs with `ErrorPolicy::Strict`.
    #[error("I/O error checking {path}: {source}")]
    Io {
        /// Candidate path whose stat failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::CurrentDir(source) | Error::Io { source, .. } => source.kind(),
        }
    }
}
