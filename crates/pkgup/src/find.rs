//! Upward file finder.
//!
//! Every function here comes in a suspending and a blocking flavor with the
//! same matching rules. The plain functions use [`NativeFileSystem`]; the
//! `_in` variants take any [`FileSystem`].

use crate::error::Result;
use crate::options::FindUpOptions;
use crate::search::Search;
use pkgup_fs::{FileSystem, NativeFileSystem};
use std::path::{Path, PathBuf};

/// Find `name` in the start directory or the nearest ancestor containing it.
///
/// Returns `Ok(None)` if the walk reaches the root (or `stop_at`) without a
/// match.
///
/// # Example
///
/// ```no_run
/// use pkgup::{find_up, FindUpOptions};
///
/// # #[tokio::main]
/// # async fn main() -> pkgup::Result<()> {
/// if let Some(path) = find_up(".git", &FindUpOptions::new()).await? {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_up(
    name: impl AsRef<Path>,
    options: &FindUpOptions,
) -> Result<Option<PathBuf>> {
    find_up_any_in(&NativeFileSystem::new(), &[name.as_ref()], options).await
}

/// Blocking version of [`find_up`].
pub fn find_up_sync(name: impl AsRef<Path>, options: &FindUpOptions) -> Result<Option<PathBuf>> {
    find_up_any_sync_in(&NativeFileSystem::new(), &[name.as_ref()], options)
}

/// Like [`find_up`], trying each of `names` in order at every level.
///
/// A nearer level always beats a farther one, whatever the name order.
pub async fn find_up_any<N: AsRef<Path> + Sync>(
    names: &[N],
    options: &FindUpOptions,
) -> Result<Option<PathBuf>> {
    find_up_any_in(&NativeFileSystem::new(), names, options).await
}

/// Blocking version of [`find_up_any`].
pub fn find_up_any_sync<N: AsRef<Path>>(
    names: &[N],
    options: &FindUpOptions,
) -> Result<Option<PathBuf>> {
    find_up_any_sync_in(&NativeFileSystem::new(), names, options)
}

/// [`find_up`] against an explicit filesystem.
pub async fn find_up_in(
    fs: &dyn FileSystem,
    name: impl AsRef<Path>,
    options: &FindUpOptions,
) -> Result<Option<PathBuf>> {
    find_up_any_in(fs, &[name.as_ref()], options).await
}

/// [`find_up_sync`] against an explicit filesystem.
pub fn find_up_sync_in(
    fs: &dyn FileSystem,
    name: impl AsRef<Path>,
    options: &FindUpOptions,
) -> Result<Option<PathBuf>> {
    find_up_any_sync_in(fs, &[name.as_ref()], options)
}

/// [`find_up_any`] against an explicit filesystem.
pub async fn find_up_any_in<N: AsRef<Path> + Sync>(
    fs: &dyn FileSystem,
    names: &[N],
    options: &FindUpOptions,
) -> Result<Option<PathBuf>> {
    let search = Search::new(fs, names, options)?;
    for candidate in search.candidates() {
        let stat = fs.metadata(candidate).await;
        if let Some(found) = search.check(candidate, stat)? {
            return Ok(Some(found));
        }
    }
    search.exhausted();
    Ok(None)
}

/// [`find_up_any_sync`] against an explicit filesystem.
pub fn find_up_any_sync_in<N: AsRef<Path>>(
    fs: &dyn FileSystem,
    names: &[N],
    options: &FindUpOptions,
) -> Result<Option<PathBuf>> {
    let search = Search::new(fs, names, options)?;
    for candidate in search.candidates() {
        let stat = fs.metadata_sync(candidate);
        if let Some(found) = search.check(candidate, stat)? {
            return Ok(Some(found));
        }
    }
    search.exhausted();
    Ok(None)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::options::{EntryType, ErrorPolicy};
    use pkgup_fs::MemoryFileSystem;

    fn tree() -> MemoryFileSystem {
        let fs = MemoryFileSystem::new("/a/b/c").unwrap();
        fs.add_file("/a/package.json").unwrap();
        fs.add_file("/a/b/c/README.md").unwrap();
        fs.add_dir("/a/b/node_modules").unwrap();
        fs.add_dir("/x/y").unwrap();
        fs
    }

    #[tokio::test]
    async fn test_finds_nearest_ancestor() {
        let fs = tree();
        let options = FindUpOptions::new();

        assert_eq!(
            find_up_in(&fs, "package.json", &options).await.unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
        assert_eq!(
            find_up_sync_in(&fs, "package.json", &options).unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
    }

    #[tokio::test]
    async fn test_match_in_start_directory() {
        let fs = tree();
        let options = FindUpOptions::new();

        assert_eq!(
            find_up_in(&fs, "README.md", &options).await.unwrap(),
            Some(PathBuf::from("/a/b/c/README.md"))
        );
    }

    #[tokio::test]
    async fn test_entry_type_directory() {
        let fs = tree();

        // A directory is not a file match.
        let files = FindUpOptions::new();
        assert_eq!(find_up_in(&fs, "node_modules", &files).await.unwrap(), None);

        let dirs = FindUpOptions::new().with_entry_type(EntryType::Directory);
        assert_eq!(
            find_up_in(&fs, "node_modules", &dirs).await.unwrap(),
            Some(PathBuf::from("/a/b/node_modules"))
        );
        assert_eq!(find_up_sync_in(&fs, "package.json", &dirs).unwrap(), None);
    }

    #[tokio::test]
    async fn test_stop_at_excludes_higher_levels() {
        let fs = tree();
        let options = FindUpOptions::new().with_stop_at("/a/b");

        assert_eq!(find_up_in(&fs, "package.json", &options).await.unwrap(), None);
        assert_eq!(find_up_sync_in(&fs, "package.json", &options).unwrap(), None);

        let inclusive = FindUpOptions::new().with_stop_at("/a");
        assert_eq!(
            find_up_sync_in(&fs, "package.json", &inclusive).unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
    }

    #[tokio::test]
    async fn test_any_prefers_nearer_level() {
        let fs = tree();
        let options = FindUpOptions::new();

        // package.json is listed first but README.md is nearer.
        assert_eq!(
            find_up_any_in(&fs, &["package.json", "README.md"], &options)
                .await
                .unwrap(),
            Some(PathBuf::from("/a/b/c/README.md"))
        );
        assert_eq!(
            find_up_any_sync_in(&fs, &["missing", "package.json"], &options).unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
    }

    #[tokio::test]
    async fn test_absolute_name() {
        let fs = tree();
        let options = FindUpOptions::new().with_cwd("/x/y");

        assert_eq!(
            find_up_in(&fs, "/a/package.json", &options).await.unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
        assert_eq!(find_up_sync_in(&fs, "/a/missing", &options).unwrap(), None);
    }

    #[tokio::test]
    async fn test_parent_relative_name_is_resolved_lexically() {
        let fs = tree();
        fs.add_file("/a/b/package.json").unwrap();
        let options = FindUpOptions::new();

        assert_eq!(
            find_up_sync_in(&fs, "../package.json", &options).unwrap(),
            Some(PathBuf::from("/a/b/package.json"))
        );
        assert_eq!(
            find_up_in(&fs, "../package.json", &options).await.unwrap(),
            Some(PathBuf::from("/a/b/package.json"))
        );
    }

    #[tokio::test]
    async fn test_empty_name_returns_level_without_trailing_separator() {
        let fs = tree();
        let dirs = FindUpOptions::new().with_entry_type(EntryType::Directory);

        assert_eq!(
            find_up_in(&fs, "", &dirs).await.unwrap(),
            Some(PathBuf::from("/a/b/c"))
        );
    }

    #[tokio::test]
    async fn test_skip_continues_past_denied_level() {
        let fs = tree();
        fs.deny("/a/b");
        let options = FindUpOptions::new();

        assert_eq!(
            find_up_in(&fs, "package.json", &options).await.unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
        assert_eq!(
            find_up_sync_in(&fs, "package.json", &options).unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
    }

    #[tokio::test]
    async fn test_strict_aborts_on_denied_level() {
        let fs = tree();
        fs.deny("/a/b");
        let options = FindUpOptions::new().with_error_policy(ErrorPolicy::Strict);

        let err = find_up_in(&fs, "package.json", &options).await.unwrap_err();
        assert!(matches!(
            &err,
            crate::Error::Io { path, .. } if path == Path::new("/a/b/c/package.json")
        ));
        let err = find_up_sync_in(&fs, "package.json", &options).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
    }

    #[tokio::test]
    async fn test_denied_root_level() {
        let fs = MemoryFileSystem::new("/").unwrap();
        fs.deny("/");

        let skip = FindUpOptions::new();
        assert_eq!(find_up_in(&fs, "package.json", &skip).await.unwrap(), None);
        assert_eq!(find_up_sync_in(&fs, "package.json", &skip).unwrap(), None);

        let strict = FindUpOptions::new().with_error_policy(ErrorPolicy::Strict);
        let err = find_up_sync_in(&fs, "package.json", &strict).unwrap_err();
        assert!(matches!(
            &err,
            crate::Error::Io { path, .. } if path == Path::new("/package.json")
        ));
        assert!(find_up_in(&fs, "package.json", &strict).await.is_err());
    }

    #[tokio::test]
    async fn test_strict_ignores_levels_never_visited() {
        let fs = tree();
        fs.deny("/x");
        let options = FindUpOptions::new().with_error_policy(ErrorPolicy::Strict);

        assert_eq!(
            find_up_in(&fs, "package.json", &options).await.unwrap(),
            Some(PathBuf::from("/a/package.json"))
        );
    }
}
