//! Options for upward searches.

use pkgup_fs::FileMetadata;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which kind of entry counts as a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    /// Regular files (after following symlinks).
    #[default]
    File,
    /// Directories (after following symlinks).
    Directory,
}

impl EntryType {
    /// Whether `meta` describes an entry of this kind.
    pub fn matches(self, meta: &FileMetadata) -> bool {
        match self {
            EntryType::File => meta.exists && meta.is_file,
            EntryType::Directory => meta.exists && meta.is_dir,
        }
    }
}

/// What to do when a candidate cannot be checked.
///
/// Only errors other than "not found" are affected; a missing candidate just
/// moves the search one level up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Treat the level as "no match" and keep walking upward.
    #[default]
    Skip,
    /// Abort the search with [`crate::Error::Io`].
    Strict,
}

/// Options for `find_up` and friends.
///
/// ```
/// use pkgup::{EntryType, FindUpOptions};
///
/// let options = FindUpOptions::new()
///     .with_cwd("/srv/app/src")
///     .with_stop_at("/srv")
///     .with_entry_type(EntryType::Directory);
/// assert_eq!(options.entry_type, EntryType::Directory);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FindUpOptions {
    /// Directory to start from. Relative paths are resolved against the
    /// process working directory. Defaults to the working directory.
    pub cwd: Option<PathBuf>,

    /// Kind of entry to look for (default: file).
    #[serde(alias = "type")]
    pub entry_type: EntryType,

    /// Last directory to check. Relative paths are resolved against the start
    /// directory. Defaults to the filesystem root.
    pub stop_at: Option<PathBuf>,

    /// Handling of unreadable candidates (default: skip).
    pub error_policy: ErrorPolicy,
}

impl FindUpOptions {
    /// Default options: start at the working directory, look for files,
    /// walk to the root, skip unreadable levels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the kind of entry to look for.
    pub fn with_entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = entry_type;
        self
    }

    /// Set the last directory to check.
    pub fn with_stop_at(mut self, stop_at: impl Into<PathBuf>) -> Self {
        self.stop_at = Some(stop_at.into());
        self
    }

    /// Set the handling of unreadable candidates.
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}
