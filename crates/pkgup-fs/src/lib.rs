//! Filesystem abstraction for pkgup.
//!
//! This crate provides a `FileSystem` trait exposing the small set of
//! operations an upward search needs, with both a blocking and an async form
//! of every check. Two backends are available: the native one (using
//! `std::fs`, offloaded to tokio's blocking pool for async callers) and an
//! in-memory one for tests and virtual trees.
//!
//! # Example
//!
//! ```no_run
//! use pkgup_fs::{FileSystem, NativeFileSystem};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> std::io::Result<()> {
//! let fs = NativeFileSystem::new();
//! let meta = fs.metadata(Path::new("package.json")).await?;
//! println!("exists: {}", meta.exists);
//! # Ok(())
//! # }
//! ```

mod file_system;
pub mod path;

pub use file_system::{is_absent, FileMetadata, FileSystem};

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "native")]
pub use native::NativeFileSystem;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "memory")]
pub use memory::MemoryFileSystem;
