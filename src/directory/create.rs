//! Recursive directory creation
//!
//! [`ensure_directory_tree`] walks upward from the target until it meets a
//! directory that already exists, then creates the missing chain top-down so
//! that every `mkdir` targets a path whose parent is present. The walk is an
//! explicit loop over `Path::ancestors`, so nesting depth does not grow the
//! call stack.

use crate::classify::is_directory;
use crate::error::{FsError, Result};
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;
use tracing::{debug, error};

/// Create `path` and any missing ancestors with permission `mode`
///
/// The mode is passed to `mkdir(2)` and is therefore reduced by the process
/// umask, exactly like `mkdir -m`. Directories that already exist keep their
/// current mode.
///
/// Succeeds without doing anything if `path` is `/` or already a directory,
/// so repeated calls are harmless.
///
/// # Errors
///
/// - [`FsError::InvalidArgument`] if `path` is empty
/// - [`FsError::Io`] for the first `mkdir` that fails, including when an
///   ancestor exists but is not a directory. Ancestors created before the
///   failure are left in place.
///
/// # Example
///
/// ```rust,no_run
/// use rootfs_utils::ensure_directory_tree;
///
/// fn main() -> rootfs_utils::Result<()> {
///     ensure_directory_tree("/containers/c1/rootfs/var/lib", 0o755)?;
///     Ok(())
/// }
/// ```
pub fn ensure_directory_tree(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    debug!("Called ensure_directory_tree({}, {:o})", path.display(), mode);

    if path.as_os_str().is_empty() {
        error!("Could not create directory: empty path");
        return Err(FsError::InvalidArgument(
            "directory path must not be empty".to_string(),
        ));
    }

    let missing = missing_ancestors(path);
    if missing.is_empty() {
        debug!("Directory already exists: {}", path.display());
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.mode(mode);

    for dir in missing.iter().rev() {
        debug!("Creating directory: {}", dir.display());
        builder.create(dir).map_err(|e| {
            error!("Could not create directory {}: {}", dir.display(), e);
            FsError::io("mkdir", dir, e)
        })?;
    }

    debug!(
        "Returning from ensure_directory_tree({}): created {} directories",
        path.display(),
        missing.len()
    );
    Ok(())
}

/// Ancestors of `path` (itself included) that are not directories, leaf first
///
/// Stops at the first existing directory, at `/`, or at the empty parent of a
/// relative path (the current directory).
fn missing_ancestors(path: &Path) -> Vec<&Path> {
    path.ancestors()
        .take_while(|p| {
            !p.as_os_str().is_empty() && *p != Path::new("/") && !is_directory(p)
        })
        .collect()
}
