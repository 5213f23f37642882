//! Recursive directory removal
//!
//! Removal is a depth-first, post-order walk: every entry is removed before
//! the directory containing it, so `rmdir(2)` always sees an empty directory.
//! The walk holds at most [`FsConfig::max_open_dirs`] directory handles at a
//! time, so deep trees do not exhaust the descriptor limit.
//!
//! Symlinks are never followed, including a symlink given as the root: the
//! link itself is unlinked and its target is left alone.
//!
//! # Failure policy
//!
//! - [`RemovalPolicy::AbortOnFirstError`] (default): the first entry that
//!   cannot be removed ends the walk. Unvisited entries, and the root, remain
//!   on disk.
//! - [`RemovalPolicy::BestEffort`]: every entry is attempted and each failure
//!   is collected into [`FsError::PartialRemoval`]. A directory whose
//!   children could not be removed shows up as well, since it is not empty.

use crate::config::{FsConfig, RemovalPolicy};
use crate::error::{FsError, RemovalFailure, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};
use walkdir::WalkDir;

/// Remove `path` and everything beneath it using the default config
///
/// # Errors
///
/// See [`remove_directory_tree_with`].
pub fn remove_directory_tree(path: impl AsRef<Path>) -> Result<()> {
    remove_directory_tree_with(path, &FsConfig::default())
}

/// Remove `path` and everything beneath it
///
/// A non-directory `path` is simply unlinked.
///
/// # Errors
///
/// - [`FsError::InvalidArgument`] if `path` is empty
/// - [`FsError::Io`] for the first entry that cannot be listed or removed
///   (abort policy); a missing `path` is reported this way too
/// - [`FsError::PartialRemoval`] listing every leftover entry (best-effort
///   policy)
///
/// # Example
///
/// ```rust,no_run
/// use rootfs_utils::{remove_directory_tree_with, FsConfig, RemovalPolicy};
///
/// fn main() -> rootfs_utils::Result<()> {
///     let config = FsConfig::default().with_removal_policy(RemovalPolicy::BestEffort);
///     remove_directory_tree_with("/containers/c1/rootfs", &config)?;
///     Ok(())
/// }
/// ```
pub fn remove_directory_tree_with(path: impl AsRef<Path>, config: &FsConfig) -> Result<()> {
    let root = path.as_ref();
    debug!("Removing directory: {}", root.display());

    if root.as_os_str().is_empty() {
        error!("Could not remove directory: empty path");
        return Err(FsError::InvalidArgument(
            "directory path must not be empty".to_string(),
        ));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .contents_first(true)
        .max_open(config.effective_max_open_dirs());

    let mut failures = Vec::new();

    for entry in walker {
        let outcome = match entry {
            Ok(entry) => remove_entry(entry.path(), entry.file_type().is_dir())
                .map_err(|e| ("remove", entry.path().to_path_buf(), e)),
            Err(e) => {
                let failed = e.path().unwrap_or(root).to_path_buf();
                Err(("walk", failed, walk_error_to_io(e)))
            }
        };

        let Err((op, failed, source)) = outcome else {
            continue;
        };

        error!("Could not {} {}: {}", op, failed.display(), source);
        match config.removal_policy {
            RemovalPolicy::AbortOnFirstError => return Err(FsError::io(op, failed, source)),
            RemovalPolicy::BestEffort => failures.push(RemovalFailure {
                path: failed,
                source,
            }),
        }
    }

    if failures.is_empty() {
        debug!("Removed directory: {}", root.display());
        Ok(())
    } else {
        Err(FsError::PartialRemoval {
            path: PathBuf::from(root),
            failures,
        })
    }
}

fn remove_entry(path: &Path, is_dir: bool) -> io::Result<()> {
    trace!("remove({})", path.display());
    if is_dir {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

fn walk_error_to_io(err: walkdir::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}
