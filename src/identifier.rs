//! Per-entry identifiers
//!
//! An [`Identifier`] is the string `"{uid}.{dev}.{ino}"`, where `uid` is the
//! real user id of the calling process (not the entry's owner) and `dev`/`ino`
//! come from a non-following `lstat`. Two lookups of the same entry by the
//! same user yield the same string; distinct entries differ unless the OS
//! reuses a device/inode pair.
//!
//! Identifiers are sized to fit their content and never truncated. Three
//! 64-bit decimal components bound the length at 52 bytes.

use crate::error::{FsError, Result};
use crate::metadata::symlink_entry_metadata;
use std::fmt;
use std::path::Path;
use tracing::{debug, error, info};

/// Composite key naming a filesystem entry for a given caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Build an identifier from its components
    #[must_use]
    pub fn from_parts(uid: u32, dev: u64, ino: u64) -> Self {
        Self(format!("{uid}.{dev}.{ino}"))
    }

    /// Borrow the identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the identifier string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// Generate the identifier for `path`
///
/// Symlinks are not followed: a link and its target get different
/// identifiers.
///
/// # Errors
///
/// Returns [`FsError::NotFound`] if `lstat` fails for any reason.
pub fn generate_identifier(path: impl AsRef<Path>) -> Result<Identifier> {
    let path = path.as_ref();
    debug!("Called generate_identifier({})", path.display());

    let meta = symlink_entry_metadata(path).map_err(|e| {
        error!("Could not stat {}: {}", path.display(), e);
        FsError::not_found(path)
    })?;

    let uid = nix::unistd::getuid().as_raw();
    let id = Identifier::from_parts(uid, meta.dev, meta.ino);

    info!("Generated identifier: {}", id);
    debug!("Returning generate_identifier({}) = {}", path.display(), id);
    Ok(id)
}
