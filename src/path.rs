//! Path joining for container-relative paths

use std::path::{Component, Path, PathBuf};

/// Join `relative` onto `base`, treating an absolute `relative` as relative
///
/// `Path::join` replaces the base when given an absolute path. Container
/// paths such as `/usr/bin` are meant to land under the container root, so
/// leading root components are dropped first.
///
/// ```rust
/// use rootfs_utils::join_path;
/// use std::path::Path;
///
/// assert_eq!(join_path("/c", "/usr/bin"), Path::new("/c/usr/bin"));
/// assert_eq!(join_path("/c", "usr"), Path::new("/c/usr"));
/// ```
#[must_use]
pub fn join_path(base: impl AsRef<Path>, relative: impl AsRef<Path>) -> PathBuf {
    let stripped: PathBuf = relative
        .as_ref()
        .components()
        .skip_while(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    base.as_ref().join(stripped)
}
