//! In-memory filesystem implementation.

use crate::path::resolve;
use crate::{FileMetadata, FileSystem};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Node {
    File,
    Dir,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: HashMap<PathBuf, Node>,
    denied: HashSet<PathBuf>,
}

/// In-memory filesystem for tests and virtual trees.
///
/// Paths are absolute after lexical resolution against the configured cwd.
/// Adding an entry creates its parent directories implicitly.
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<Tree>>` for interior mutability:
/// - Multiple concurrent readers (every search)
/// - Exclusive writer (rare: only during setup)
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    cwd: PathBuf,
    tree: Arc<RwLock<Tree>>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem whose working directory is `cwd`.
    ///
    /// The working directory and its ancestors are created as directories.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `cwd` is not absolute.
    pub fn new(cwd: impl AsRef<Path>) -> io::Result<Self> {
        let cwd = cwd.as_ref();
        if !cwd.is_absolute() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Working directory must be absolute: {}", cwd.display()),
            ));
        }

        let fs = Self {
            cwd: resolve(cwd, Path::new("")),
            tree: Arc::new(RwLock::new(Tree::default())),
        };
        fs.add_dir(&fs.cwd)?;
        Ok(fs)
    }

    /// Add a file.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the path, or one of its ancestors, is
    /// already taken by an entry of the other kind.
    pub fn add_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = resolve(&self.cwd, path.as_ref());
        self.insert(path, Node::File)
    }

    /// Add a directory.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = resolve(&self.cwd, path.as_ref());
        self.insert(path, Node::Dir)
    }

    /// Make every stat strictly below `path` fail with `PermissionDenied`.
    ///
    /// This models a directory without search permission: the directory
    /// itself can still be stat'ed, its children cannot.
    pub fn deny(&self, path: impl AsRef<Path>) {
        let path = resolve(&self.cwd, path.as_ref());
        self.tree.write().denied.insert(path);
    }

    fn insert(&self, path: PathBuf, node: Node) -> io::Result<()> {
        let mut tree = self.tree.write();

        for ancestor in path.ancestors().skip(1) {
            match tree.nodes.get(ancestor) {
                Some(Node::Dir) => {}
                Some(Node::File) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("Not a directory: {}", ancestor.display()),
                    ));
                }
                None => {
                    tree.nodes.insert(ancestor.to_path_buf(), Node::Dir);
                }
            }
        }

        match (tree.nodes.get(&path), &node) {
            (Some(Node::Dir), Node::Dir) => Ok(()),
            (Some(_), _) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Entry already exists: {}", path.display()),
            )),
            (None, _) => {
                tree.nodes.insert(path, node);
                Ok(())
            }
        }
    }

    fn lookup(&self, path: &Path) -> io::Result<FileMetadata> {
        let path = resolve(&self.cwd, path);
        let tree = self.tree.read();

        // Walk from the root down, the same order a kernel resolves a path.
        let ancestors: Vec<&Path> = path.ancestors().skip(1).collect();
        for ancestor in ancestors.into_iter().rev() {
            if tree.denied.contains(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("Permission denied: {}", path.display()),
                ));
            }
            match tree.nodes.get(ancestor) {
                Some(Node::Dir) => {}
                Some(Node::File) | None => return Ok(FileMetadata::missing()),
            }
        }

        Ok(match tree.nodes.get(&path) {
            Some(Node::File) => FileMetadata::file(),
            Some(Node::Dir) => FileMetadata::dir(),
            None => FileMetadata::missing(),
        })
    }
}

#[async_trait::async_trait]
impl FileSystem for MemoryFileSystem {
    fn cwd(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn metadata_sync(&self, path: &Path) -> io::Result<FileMetadata> {
        self.lookup(path)
    }

    async fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        // In-memory lookups complete immediately
        self.lookup(path)
    }
}
