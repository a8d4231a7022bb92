//! The ancestry walk shared by the blocking and async entry points.
//!
//! A [`Search`] is planned up front: the start is resolved, the levels are
//! listed from the start toward the root (or `stop_at`), and each level
//! contributes one candidate per name. Callers stat the candidates in order,
//! with whichever flavor of I/O they need, and hand every result back to
//! [`Search::check`]. The first match wins.

use crate::error::{Error, Result};
use crate::options::{EntryType, ErrorPolicy, FindUpOptions};
use pkgup_fs::path::resolve;
use pkgup_fs::{FileMetadata, FileSystem};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

#[derive(Debug)]
pub(crate) struct Search {
    start: PathBuf,
    candidates: Vec<PathBuf>,
    entry_type: EntryType,
    error_policy: ErrorPolicy,
}

impl Search {
    pub(crate) fn new<N: AsRef<Path>>(
        fs: &dyn FileSystem,
        names: &[N],
        options: &FindUpOptions,
    ) -> Result<Self> {
        let start = start_directory(fs, options.cwd.as_deref())?;
        let stop_at = options
            .stop_at
            .as_deref()
            .map(|stop_at| resolve(&start, stop_at));

        let mut candidates = Vec::new();
        for (depth, dir) in start.ancestors().enumerate() {
            for name in names {
                let name = name.as_ref();
                // Absolute names are the same path at every level.
                if depth == 0 || !name.is_absolute() {
                    candidates.push(resolve(dir, name));
                }
            }

            if stop_at.as_deref() == Some(dir) {
                break;
            }
        }

        Ok(Self {
            start,
            candidates,
            entry_type: options.entry_type,
            error_policy: options.error_policy,
        })
    }

    /// Candidates in the order they must be checked.
    pub(crate) fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Classify the stat result for `candidate`.
    ///
    /// `Ok(Some(path))` ends the search with a match, `Ok(None)` moves on.
    pub(crate) fn check(
        &self,
        candidate: &Path,
        stat: io::Result<FileMetadata>,
    ) -> Result<Option<PathBuf>> {
        trace!(candidate = %candidate.display(), "checking");

        match stat {
            Ok(meta) if self.entry_type.matches(&meta) => {
                debug!(path = %candidate.display(), "found");
                Ok(Some(candidate.to_path_buf()))
            }
            Ok(_) => Ok(None),
            Err(source) => match self.error_policy {
                ErrorPolicy::Skip => {
                    debug!(
                        candidate = %candidate.display(),
                        error = %source,
                        "skipping unreadable candidate"
                    );
                    Ok(None)
                }
                ErrorPolicy::Strict => Err(Error::Io {
                    path: candidate.to_path_buf(),
                    source,
                }),
            },
        }
    }

    /// Record that every candidate was checked without a match.
    pub(crate) fn exhausted(&self) {
        debug!(
            start = %self.start.display(),
            checked = self.candidates.len(),
            "no match"
        );
    }
}

/// Absolute, lexically normalized start directory.
///
/// The working directory is only read when `cwd` is missing or relative.
fn start_directory(fs: &dyn FileSystem, cwd: Option<&Path>) -> Result<PathBuf> {
    match cwd {
        Some(cwd) if cwd.is_absolute() => Ok(resolve(cwd, Path::new(""))),
        Some(cwd) => Ok(resolve(&fs.cwd().map_err(Error::CurrentDir)?, cwd)),
        None => Ok(resolve(&fs.cwd().map_err(Error::CurrentDir)?, Path::new(""))),
    }
}
