//! Locate the closest `package.json`.

use crate::error::Result;
use crate::find::{find_up_in, find_up_sync_in};
use crate::options::FindUpOptions;
use pkgup_fs::{FileSystem, NativeFileSystem};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name searched for by [`package_up`].
pub const PACKAGE_JSON: &str = "package.json";

/// Options for finding the closest `package.json` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageUpOptions {
    /// The directory to start from (default: the process working directory).
    pub cwd: Option<PathBuf>,
}

impl PackageUpOptions {
    /// Start from the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `cwd` instead.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl From<&PackageUpOptions> for FindUpOptions {
    fn from(options: &PackageUpOptions) -> Self {
        FindUpOptions {
            cwd: options.cwd.clone(),
            ..FindUpOptions::default()
        }
    }
}

/// Find the closest `package.json` file.
///
/// Returns the file path, or `None` if no ancestor contains one.
///
/// # Example
///
/// ```text
/// /
/// └── srv
///     └── app
///         ├── package.json
///         └── src
///             └── components
/// ```
///
/// ```no_run
/// use pkgup::{package_up, PackageUpOptions};
///
/// # #[tokio::main]
/// # async fn main() -> pkgup::Result<()> {
/// let options = PackageUpOptions::new().with_cwd("/srv/app/src/components");
/// println!("{:?}", package_up(&options).await?);
/// //=> Some("/srv/app/package.json")
/// # Ok(())
/// # }
/// ```
pub async fn package_up(options: &PackageUpOptions) -> Result<Option<PathBuf>> {
    package_up_in(&NativeFileSystem::new(), options).await
}

/// Synchronously find the closest `package.json` file.
///
/// Same result as [`package_up`] for the same filesystem state.
pub fn package_up_sync(options: &PackageUpOptions) -> Result<Option<PathBuf>> {
    package_up_sync_in(&NativeFileSystem::new(), options)
}

/// [`package_up`] against an explicit filesystem.
pub async fn package_up_in(
    fs: &dyn FileSystem,
    options: &PackageUpOptions,
) -> Result<Option<PathBuf>> {
    find_up_in(fs, PACKAGE_JSON, &options.into()).await
}

/// [`package_up_sync`] against an explicit filesystem.
pub fn package_up_sync_in(
    fs: &dyn FileSystem,
    options: &PackageUpOptions,
) -> Result<Option<PathBuf>> {
    find_up_sync_in(fs, PACKAGE_JSON, &options.into())
}
