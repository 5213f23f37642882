//! Container base-directory resolution
//!
//! Given a container root and a path inside it, find the deepest ancestor of
//! that path which already exists as a directory under the root. Mount setup
//! uses this to decide where a bind target's missing chain starts.
//!
//! The walk strips one trailing component at a time:
//!
//! ```text
//! root = /c, dir = usr/local/bin, only /c/usr exists
//!
//!   /c/usr/local/bin   missing
//!   /c/usr/local       missing
//!   /c/usr             exists  -> "usr"
//! ```
//!
//! A relative `dir` ends the walk at `.`, the container root itself, which is
//! returned when no deeper segment exists. Absolute input ends at its first
//! segment below `/`. When not even the root exists, the shallowest segment
//! examined (e.g. `usr`) is returned instead of an error.

use crate::classify::is_directory;
use crate::error::{FsError, Result};
use crate::path::join_path;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Resolve the deepest existing ancestor of `dir` beneath `container_root`
///
/// # Parameters
///
/// * `container_root` - Host path of the container's root filesystem
/// * `dir` - Path inside the container, absolute or relative
///
/// # Returns
///
/// The ancestor segment of `dir` (in the same form `dir` was given) that
/// exists as a directory under the root. For relative input this may be `.`
/// when only the root exists. If nothing exists, the shallowest segment.
///
/// # Errors
///
/// - [`FsError::InvalidArgument`] if either argument is empty
/// - [`FsError::NotFound`] if `dir` has no candidate at all: it is `/`, or it
///   is `.` and the container root does not exist
///
/// # Example
///
/// ```rust,no_run
/// use rootfs_utils::resolve_base_directory;
///
/// fn main() -> rootfs_utils::Result<()> {
///     let base = resolve_base_directory("/containers/c1/rootfs", "usr/local/bin")?;
///     println!("first existing segment: {}", base.display());
///     Ok(())
/// }
/// ```
pub fn resolve_base_directory(
    container_root: impl AsRef<Path>,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let container_root = container_root.as_ref();
    let dir = dir.as_ref();
    debug!(
        "Called resolve_base_directory({}, {})",
        container_root.display(),
        dir.display()
    );

    if container_root.as_os_str().is_empty() || dir.as_os_str().is_empty() {
        error!("resolve_base_directory requires a container root and a directory");
        return Err(FsError::InvalidArgument(
            "container root and directory must not be empty".to_string(),
        ));
    }

    let mut fallback = None;
    for candidate in candidates(dir) {
        if is_directory(join_path(container_root, candidate)) {
            debug!("Returning existing base directory: {}", candidate.display());
            return Ok(candidate.to_path_buf());
        }
        fallback = Some(candidate);
    }

    let current = Path::new(".");
    if dir.is_relative() && is_directory(join_path(container_root, current)) {
        debug!("Returning container root as base directory for {}", dir.display());
        return Ok(current.to_path_buf());
    }

    match fallback {
        Some(candidate) => {
            debug!(
                "No ancestor of {} exists under {}, using {}",
                dir.display(),
                container_root.display(),
                candidate.display()
            );
            Ok(candidate.to_path_buf())
        }
        None => {
            error!("No candidate directory in {}", dir.display());
            Err(FsError::not_found(dir))
        }
    }
}

/// `dir` and its ancestors, leaf first, excluding `/` and the `.` parent
fn candidates(dir: &Path) -> impl Iterator<Item = &Path> {
    dir.ancestors().take_while(|p| {
        !p.as_os_str().is_empty() && *p != Path::new("/") && *p != Path::new(".")
    })
}
