//! Lexical path helpers.
//!
//! These never touch the filesystem, so symlinks are kept as written.

use std::path::{Component, Path, PathBuf};

/// Remove `.` and `..` components from a path.
///
/// Intended for absolute paths. `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                result.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(name) => {
                result.push(name);
            }
        }
    }
    result
}

/// Resolve `path` against `base` and normalize the result.
///
/// Absolute paths ignore `base`.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}
