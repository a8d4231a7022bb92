//! Property tests over in-memory directory chains.
#![cfg(unix)]

use pkgup::{
    find_up_in, find_up_sync_in, package_up_in, package_up_sync_in, FindUpOptions,
    PackageUpOptions,
};
use pkgup_fs::MemoryFileSystem;
use proptest::prelude::*;
use std::path::PathBuf;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

/// Directory `/d0/d1/.../d{depth-1}`; depth 0 is the root.
fn dir_at(depth: usize) -> PathBuf {
    let mut dir = PathBuf::from("/");
    for level in 0..depth {
        dir.push(format!("d{}", level));
    }
    dir
}

proptest! {
    /// The result is the deepest marked level at or above the start.
    #[test]
    fn nearest_ancestor_wins(
        depth in 0usize..8,
        marked in proptest::collection::btree_set(0usize..8, 0..4),
    ) {
        let fs = MemoryFileSystem::new(dir_at(depth)).unwrap();
        for &level in &marked {
            fs.add_file(dir_at(level).join("package.json")).unwrap();
        }

        let expected = marked
            .iter()
            .copied()
            .filter(|&level| level <= depth)
            .max()
            .map(|level| dir_at(level).join("package.json"));

        let sync = package_up_sync_in(&fs, &PackageUpOptions::new()).unwrap();
        prop_assert_eq!(&sync, &expected);

        let suspended = runtime()
            .block_on(package_up_in(&fs, &PackageUpOptions::new()))
            .unwrap();
        prop_assert_eq!(suspended, sync);
    }

    /// With the skip policy, both modes return the nearest readable match.
    #[test]
    fn skip_policy_returns_nearest_readable_match(
        depth in 1usize..8,
        marked in proptest::collection::btree_set(0usize..8, 0..4),
        denied in 0usize..8,
    ) {
        let fs = MemoryFileSystem::new(dir_at(depth)).unwrap();
        for &level in &marked {
            fs.add_file(dir_at(level).join("package.json")).unwrap();
        }
        fs.deny(dir_at(denied));

        // Files inside the denied directory, or deeper, are unreadable.
        let readable = |level: usize| level < denied;
        let expected = marked
            .iter()
            .copied()
            .filter(|&level| level <= depth && readable(level))
            .max()
            .map(|level| dir_at(level).join("package.json"));

        let options = FindUpOptions::new();
        let sync = find_up_sync_in(&fs, "package.json", &options).unwrap();
        prop_assert_eq!(&sync, &expected);

        let suspended = runtime()
            .block_on(find_up_in(&fs, "package.json", &options))
            .unwrap();
        prop_assert_eq!(suspended, sync);
    }
}
