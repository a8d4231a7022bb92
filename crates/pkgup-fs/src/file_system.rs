//! FileSystem trait for blocking and async existence checks.

use std::io;
use std::path::{Path, PathBuf};

/// File metadata compatible across backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileMetadata {
    /// Whether the path exists.
    pub exists: bool,
    /// Whether the path is a file (false if directory or doesn't exist).
    pub is_file: bool,
    /// Whether the path is a directory.
    pub is_dir: bool,
}

impl FileMetadata {
    /// Metadata for a path that does not exist.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Metadata for an existing regular file.
    pub fn file() -> Self {
        Self {
            exists: true,
            is_file: true,
            is_dir: false,
        }
    }

    /// Metadata for an existing directory.
    pub fn dir() -> Self {
        Self {
            exists: true,
            is_file: false,
            is_dir: true,
        }
    }
}

/// Returns true for errors that mean "nothing is there" rather than
/// "something went wrong while looking".
pub fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Filesystem abstraction used by upward searches.
///
/// # Design Decisions
///
/// ## Async and Sync
///
/// Every check exists in two forms so that suspending and blocking callers
/// share one search routine:
/// - **Native**: the async form offloads to tokio's blocking pool
/// - **Memory**: both forms complete immediately
///
/// ## Error Handling
///
/// Uses `std::io::Result<T>`. A missing path is not an error: `metadata`
/// returns `exists = false` for `NotFound` and `NotADirectory`. Anything else
/// (permission denied, I/O failure) is returned as is and left to the caller's
/// policy.
#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// The directory relative paths are resolved against.
    fn cwd(&self) -> io::Result<PathBuf>;

    /// Get file/directory metadata, blocking the calling thread.
    ///
    /// Follows symbolic links.
    fn metadata_sync(&self, path: &Path) -> io::Result<FileMetadata>;

    /// Get file/directory metadata without blocking the async runtime.
    ///
    /// Must agree with `metadata_sync` for the same filesystem state.
    async fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;
}
