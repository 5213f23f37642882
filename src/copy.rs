//! Regular file copying with permission preservation
//!
//! [`copy_file`] copies the bytes of a regular file to a destination path and
//! gives the destination the source's permission bits.
//!
//! # Sequence
//!
//! 1. Source must be a regular file, otherwise `NotFound` (destination untouched)
//! 2. Open source for reading
//! 3. Create/truncate destination
//! 4. `fstat` the open source, `fchmod` the open destination to match
//! 5. Copy content in fixed-size blocks
//!
//! Both handles are owned values and are closed on every return path.
//!
//! # Atomicity
//!
//! None. A failure part-way leaves a partially written destination. Callers
//! that need an all-or-nothing result copy to a temporary name in the same
//! directory and rename it into place.
//!
//! # Usage
//!
//! ```rust,no_run
//! use rootfs_utils::{copy_file, copy_file_with, FsConfig};
//!
//! fn main() -> rootfs_utils::Result<()> {
//!     copy_file("/etc/resolv.conf", "/containers/c1/etc/resolv.conf")?;
//!
//!     let config = FsConfig::default().with_copy_buffer_size(1024 * 1024);
//!     copy_file_with("/srv/base.img", "/containers/c1/base.img", &config)?;
//!     Ok(())
//! }
//! ```

use crate::classify::is_regular_file;
use crate::config::FsConfig;
use crate::error::{FsError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, error};

/// Copy a regular file and its permission bits using the default config
///
/// # Errors
///
/// See [`copy_file_with`].
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    copy_file_with(src, dst, &FsConfig::default())
}

/// Copy a regular file and its permission bits
///
/// # Parameters
/// - `src`: Source file path (symlinks to regular files are followed)
/// - `dst`: Destination file path; created or truncated
/// - `config`: Supplies the copy block size
///
/// # Errors
/// - [`FsError::NotFound`] if `src` is not a regular file
/// - [`FsError::Io`] if the source cannot be opened, the destination cannot
///   be created, the permission bits cannot be applied, or any read/write
///   fails
pub fn copy_file_with(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    config: &FsConfig,
) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    debug!("Called copy_file({}, {})", src.display(), dst.display());

    if !is_regular_file(src) {
        error!("Could not copy from non-existent source: {}", src.display());
        return Err(FsError::not_found(src));
    }

    debug!("Opening source file: {}", src.display());
    let mut src_file = File::open(src).map_err(|e| {
        error!("Could not read {}: {}", src.display(), e);
        FsError::io("open", src, e)
    })?;

    debug!("Opening destination file: {}", dst.display());
    let mut dst_file = File::create(dst).map_err(|e| {
        error!("Could not write {}: {}", dst.display(), e);
        FsError::io("create", dst, e)
    })?;

    let src_metadata = src_file.metadata().map_err(|e| {
        error!("Could not fstat() on {}: {}", src.display(), e);
        FsError::io("stat", src, e)
    })?;

    debug!("Cloning permission bits of source to destination");
    dst_file
        .set_permissions(src_metadata.permissions())
        .map_err(|e| {
            error!("Could not set permission mode on {}: {}", dst.display(), e);
            FsError::io("chmod", dst, e)
        })?;

    debug!("Copying file data...");
    let copied = copy_blocks(
        &mut src_file,
        &mut dst_file,
        config.effective_copy_buffer_size(),
        src,
        dst,
    )?;

    debug!(
        "Copied {} bytes from {} to {}",
        copied,
        src.display(),
        dst.display()
    );
    Ok(())
}

/// Sequential length-bounded transfer; returns the number of bytes copied
fn copy_blocks(
    reader: &mut File,
    writer: &mut File,
    buffer_size: usize,
    src: &Path,
    dst: &Path,
) -> Result<u64> {
    let mut buffer = vec![0u8; buffer_size];
    let mut total = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                error!("Could not read {}: {}", src.display(), e);
                return Err(FsError::io("read", src, e));
            }
        };

        writer.write_all(&buffer[..bytes_read]).map_err(|e| {
            error!("Could not write {}: {}", dst.display(), e);
            FsError::io("write", dst, e)
        })?;

        total += bytes_read as u64;
    }

    Ok(total)
}
