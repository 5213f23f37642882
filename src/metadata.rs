//! Entry metadata queries
//!
//! This module wraps the two `stat` flavors the rest of the crate is built on:
//!
//! - [`entry_metadata`]: follows symlinks (`stat(2)`)
//! - [`symlink_entry_metadata`]: does not follow symlinks (`lstat(2)`)
//!
//! Unlike the boolean predicates in [`crate::classify`], these report *why* a
//! query failed: a missing path (`ENOENT`/`ENOTDIR`) becomes
//! [`FsError::NotFound`], anything else becomes [`FsError::Io`].

use crate::error::{FsError, Result};
use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// Permission bits mask (suid/sgid/sticky + rwx for user/group/other)
pub const PERMISSION_BITS: u32 = 0o7777;

/// Owner execute bit (`S_IXUSR`)
const OWNER_EXECUTE: u32 = 0o100;

/// Type of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Symbolic link (only reported by the non-following query)
    Symlink,
    /// Named pipe
    Fifo,
    /// Block device
    BlockDevice,
    /// Character devices, sockets and anything else
    Other,
}

impl EntryKind {
    /// Decode the type bits of a raw `st_mode`
    #[must_use]
    pub fn from_mode(mode: u32) -> Self {
        match mode & u32::from(libc::S_IFMT) {
            m if m == u32::from(libc::S_IFREG) => Self::Regular,
            m if m == u32::from(libc::S_IFDIR) => Self::Directory,
            m if m == u32::from(libc::S_IFLNK) => Self::Symlink,
            m if m == u32::from(libc::S_IFIFO) => Self::Fifo,
            m if m == u32::from(libc::S_IFBLK) => Self::BlockDevice,
            _ => Self::Other,
        }
    }

    /// Short human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "file",
            Self::Directory => "directory",
            Self::Symlink => "symlink",
            Self::Fifo => "fifo",
            Self::BlockDevice => "block device",
            Self::Other => "other",
        }
    }
}

/// The subset of `stat` results this crate needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Entry type
    pub kind: EntryKind,
    /// Permission bits (`st_mode & 0o7777`)
    pub permissions: u32,
    /// Owning user id
    pub uid: u32,
    /// Device id of the containing filesystem
    pub dev: u64,
    /// Inode number
    pub ino: u64,
    /// Size in bytes
    pub size: u64,
}

impl EntryMetadata {
    /// Extract the fields we track from `std::fs::Metadata`
    #[must_use]
    pub fn from_std(metadata: &fs::Metadata) -> Self {
        Self {
            kind: EntryKind::from_mode(metadata.mode()),
            permissions: metadata.mode() & PERMISSION_BITS,
            uid: metadata.uid(),
            dev: metadata.dev(),
            ino: metadata.ino(),
            size: metadata.size(),
        }
    }

    /// Whether the owner-execute bit is set
    ///
    /// This says nothing about whether the calling process may execute it.
    #[must_use]
    pub const fn is_owner_executable(&self) -> bool {
        self.permissions & OWNER_EXECUTE != 0
    }
}

/// Query metadata for `path`, following symlinks
///
/// # Errors
///
/// Returns [`FsError::NotFound`] if the path (or a component of it) does not
/// exist, and [`FsError::Io`] for any other `stat` failure such as permission
/// denied.
pub fn entry_metadata(path: impl AsRef<Path>) -> Result<EntryMetadata> {
    let path = path.as_ref();
    fs::metadata(path)
        .map(|m| EntryMetadata::from_std(&m))
        .map_err(|e| map_stat_error(path, e))
}

/// Query metadata for `path` without following a final symlink
///
/// # Errors
///
/// Same as [`entry_metadata`].
pub fn symlink_entry_metadata(path: impl AsRef<Path>) -> Result<EntryMetadata> {
    let path = path.as_ref();
    fs::symlink_metadata(path)
        .map(|m| EntryMetadata::from_std(&m))
        .map_err(|e| map_stat_error(path, e))
}

fn map_stat_error(path: &Path, err: io::Error) -> FsError {
    match err.raw_os_error() {
        Some(libc::ENOENT | libc::ENOTDIR) => FsError::not_found(path),
        _ if err.kind() == io::ErrorKind::NotFound => FsError::not_found(path),
        _ => FsError::io("stat", path, err),
    }
}
