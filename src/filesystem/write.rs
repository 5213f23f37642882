//! Whole-file writing
//!
//! Writes a complete buffer to a path in one call, truncating what was there.

use crate::error::{FsError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error};

/// Write `content` to `path`, replacing any existing content
///
/// The file is created if missing (mode `0o666` before umask). The parent
/// directory is not created.
///
/// # Parameters
///
/// * `path` - Destination file
/// * `content` - Bytes to write verbatim; `&str` and `String` work directly
///
/// # Errors
///
/// Returns [`FsError::Io`] if:
/// - The file cannot be opened for writing (missing parent, permission denied)
/// - The write itself fails (e.g. disk full)
///
/// # Examples
///
/// ```rust,no_run
/// use rootfs_utils::write_whole_file;
///
/// fn main() -> rootfs_utils::Result<()> {
///     write_whole_file("/tmp/hostname", "container\n")?;
///     Ok(())
/// }
/// ```
pub fn write_whole_file(path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let content = content.as_ref();
    debug!("Called write_whole_file({}, {} bytes)", path.display(), content.len());

    let mut file = File::create(path).map_err(|e| {
        error!("Could not write to {}: {}", path.display(), e);
        FsError::io("open", path, e)
    })?;

    file.write_all(content).map_err(|e| {
        error!("Could not write to {}: {}", path.display(), e);
        FsError::io("write", path, e)
    })?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_small_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("test.txt");

        write_whole_file(&file_path, "Hello, World!")?;

        assert_eq!(fs::read(&file_path)?, b"Hello, World!");

        Ok(())
    }

    #[test]
    fn test_write_empty_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("empty.txt");

        write_whole_file(&file_path, "")?;

        assert_eq!(fs::read(&file_path)?.len(), 0);

        Ok(())
    }

    #[test]
    fn test_write_binary_content() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("data.bin");
        let data: Vec<u8> = (0..=255).collect();

        write_whole_file(&file_path, &data)?;

        assert_eq!(fs::read(&file_path)?, data);

        Ok(())
    }

    #[test]
    fn test_write_truncates_existing() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("overwrite.txt");
        fs::write(&file_path, b"Original, much longer content")?;

        write_whole_file(&file_path, "New")?;

        assert_eq!(fs::read(&file_path)?, b"New");

        Ok(())
    }

    #[test]
    fn test_write_missing_parent_fails() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("no/such/dir/file.txt");

        let err = write_whole_file(&file_path, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!file_path.exists());

        Ok(())
    }
}
