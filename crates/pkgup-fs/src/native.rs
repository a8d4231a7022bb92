//! Native filesystem implementation using std::fs + tokio.

use crate::{is_absent, FileMetadata, FileSystem};
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;

/// Native filesystem implementation using std::fs + tokio.
///
/// The async methods wrap blocking std::fs calls with tokio::spawn_blocking
/// to avoid blocking the async runtime. This works on both the current-thread
/// and multi-thread schedulers.
///
/// Unlike a project-scoped filesystem, every path on the machine is reachable:
/// an upward search must be able to stat all the way to the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    /// Create a new native filesystem.
    pub fn new() -> Self {
        Self
    }
}

/// Blocking stat shared by both forms of `metadata`.
fn stat(path: &Path) -> io::Result<FileMetadata> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(FileMetadata::dir()),
        Ok(meta) => Ok(FileMetadata {
            exists: true,
            is_file: meta.is_file(),
            is_dir: false,
        }),
        Err(e) if is_absent(&e) => Ok(FileMetadata::missing()),
        Err(e) => Err(e),
    }
}

#[async_trait::async_trait]
impl FileSystem for NativeFileSystem {
    fn cwd(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn metadata_sync(&self, path: &Path) -> io::Result<FileMetadata> {
        stat(path)
    }

    async fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || stat(&path))
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stat_missing_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let meta = stat(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(meta, FileMetadata::missing());
    }

    #[test]
    fn test_stat_through_a_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        // ENOTDIR on unix, NotFound elsewhere. Both count as absent.
        let meta = stat(&file.join("package.json")).unwrap();
        assert!(!meta.exists);
    }
}
