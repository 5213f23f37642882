//! Boolean path predicates
//!
//! Each predicate answers a single yes/no question about a path. A failed
//! metadata query (missing path, permission denied, I/O error) answers
//! `false`, so a missing path is indistinguishable from a type mismatch here.
//! Callers that need the difference use [`crate::metadata::entry_metadata`].
//!
//! All predicates follow symlinks except [`is_symlink`].

use crate::error::Result;
use crate::metadata::{entry_metadata, symlink_entry_metadata, EntryKind, EntryMetadata};
use std::path::Path;
use tracing::{debug, trace};

fn check(
    name: &str,
    path: &Path,
    query: Result<EntryMetadata>,
    test: impl FnOnce(&EntryMetadata) -> bool,
) -> bool {
    debug!("Called {}({})", name, path.display());
    let answer = match query {
        Ok(meta) => test(&meta),
        Err(e) => {
            trace!("Metadata query failed for {}: {}", path.display(), e);
            false
        }
    };
    debug!("Returning {} from {}({})", answer, name, path.display());
    answer
}

/// Whether `path` is a regular file
#[must_use]
pub fn is_regular_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    check("is_regular_file", path, entry_metadata(path), |m| {
        m.kind == EntryKind::Regular
    })
}

/// Whether `path` is a directory
#[must_use]
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    check("is_directory", path, entry_metadata(path), |m| {
        m.kind == EntryKind::Directory
    })
}

/// Whether `path` itself is a symlink (the link is not followed)
#[must_use]
pub fn is_symlink(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    check("is_symlink", path, symlink_entry_metadata(path), |m| {
        m.kind == EntryKind::Symlink
    })
}

/// Whether `path` is a named pipe
#[must_use]
pub fn is_fifo(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    check("is_fifo", path, entry_metadata(path), |m| m.kind == EntryKind::Fifo)
}

/// Whether `path` is a block device
#[must_use]
pub fn is_block_device(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    check("is_block_device", path, entry_metadata(path), |m| {
        m.kind == EntryKind::BlockDevice
    })
}

/// Whether the owner-execute bit of `path` is set
///
/// Only `S_IXUSR` is tested. It applies to directories as well, and it does
/// not mean the calling process may execute the entry.
#[must_use]
pub fn is_executable_by_owner(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    check(
        "is_executable_by_owner",
        path,
        entry_metadata(path),
        EntryMetadata::is_owner_executable,
    )
}

/// Whether `path` is owned by `uid`
#[must_use]
pub fn is_owned_by(path: impl AsRef<Path>, uid: u32) -> bool {
    let path = path.as_ref();
    check("is_owned_by", path, entry_metadata(path), |m| m.uid == uid)
}
