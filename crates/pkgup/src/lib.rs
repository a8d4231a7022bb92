//! # pkgup
//!
//! Find the closest `package.json` by walking up the directory tree.
//!
//! This crate provides:
//! - `package_up` / `package_up_sync`: nearest `package.json` from a starting
//!   directory (default: the working directory)
//! - `find_up` / `find_up_sync`: the general upward search, with entry type,
//!   stop directory and error policy options
//! - `find_up_any` / `find_up_any_sync`: several names per level
//!
//! ## Architecture
//!
//! - Filesystem access goes through the `pkgup_fs::FileSystem` trait, so the
//!   same search runs against the native filesystem or an in-memory tree
//! - One search routine plans the candidates and classifies every stat result;
//!   the async and blocking entry points only differ in how they stat
//! - "Not found" is `Ok(None)`; errors are reserved for a missing working
//!   directory and, under `ErrorPolicy::Strict`, unreadable candidates
//!
//! ## Example
//!
//! ```rust,no_run
//! use pkgup::{package_up_sync, PackageUpOptions};
//!
//! # fn example() -> pkgup::Result<()> {
//! match package_up_sync(&PackageUpOptions::new())? {
//!     Some(path) => println!("{}", path.display()),
//!     None => println!("no package.json above the working directory"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod find;
pub mod options;
pub mod package;
mod search;

pub use error::{Error, Result};
pub use find::{
    find_up, find_up_any, find_up_any_in, find_up_any_sync, find_up_any_sync_in, find_up_in,
    find_up_sync, find_up_sync_in,
};
pub use options::{EntryType, ErrorPolicy, FindUpOptions};
pub use package::{
    package_up, package_up_in, package_up_sync, package_up_sync_in, PackageUpOptions,
    PACKAGE_JSON,
};

// Re-export the filesystem abstraction for `_in` callers
pub use pkgup_fs::{FileSystem, NativeFileSystem};
