//! Whole-file reading
//!
//! Reads a regular file into memory in one call. The length is measured up
//! front by seeking to the end, and exactly that many bytes are requested:
//!
//! - if the file shrinks after measuring, the shorter content is returned
//! - if it grows, bytes past the measured length are not read
//!
//! The copy is length-bounded rather than sentinel-terminated, so binary
//! content of any byte value is returned intact.

use crate::classify::is_regular_file;
use crate::error::{FsError, Result};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, error};

/// Read the entire content of the regular file at `path`
///
/// # Parameters
///
/// * `path` - File to read; symlinks to regular files are followed
///
/// # Returns
///
/// Returns `Ok(Vec<u8>)` containing the file content, with no terminator
///
/// # Errors
///
/// Returns [`FsError::NotFound`] if `path` is not a regular file, and
/// [`FsError::Io`] if:
/// - File cannot be opened
/// - Seeking to measure the length fails
/// - A buffer of the measured length cannot be allocated
///   ([`io::ErrorKind::OutOfMemory`])
/// - File cannot be read
///
/// # Examples
///
/// ```rust,no_run
/// use rootfs_utils::read_whole_file;
///
/// fn main() -> rootfs_utils::Result<()> {
///     let content = read_whole_file("/etc/hostname")?;
///     println!("Read {} bytes", content.len());
///     Ok(())
/// }
/// ```
pub fn read_whole_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    debug!("Called read_whole_file({})", path.display());

    if !is_regular_file(path) {
        error!("Could not find {}", path.display());
        return Err(FsError::not_found(path));
    }

    let mut file = File::open(path).map_err(|e| {
        error!("Could not read from {}: {}", path.display(), e);
        FsError::io("open", path, e)
    })?;

    let length = measure(&mut file).map_err(|e| {
        error!("Could not seek to end of file {}: {}", path.display(), e);
        FsError::io("seek", path, e)
    })?;

    let mut content = buffer_for(length).map_err(|e| {
        error!("Could not allocate {} bytes to read {}: {}", length, path.display(), e);
        FsError::io("read", path, e)
    })?;
    file.take(length).read_to_end(&mut content).map_err(|e| {
        error!("Could not read from {}: {}", path.display(), e);
        FsError::io("read", path, e)
    })?;

    debug!("Read {} of {} bytes from {}", content.len(), length, path.display());
    Ok(content)
}

/// Read the regular file at `path` as UTF-8 text
///
/// # Errors
///
/// Same as [`read_whole_file`]; content that is not valid UTF-8 is reported
/// as [`FsError::Io`] with kind [`io::ErrorKind::InvalidData`].
pub fn read_whole_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = read_whole_file(path)?;
    String::from_utf8(content).map_err(|e| {
        error!("Content of {} is not valid UTF-8: {}", path.display(), e);
        FsError::io("read", path, io::Error::new(io::ErrorKind::InvalidData, e))
    })
}

/// Empty buffer with room for `length` bytes, without aborting on huge sizes
fn buffer_for(length: u64) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    usize::try_from(length)
        .ok()
        .and_then(|n| buffer.try_reserve_exact(n).ok())
        .ok_or_else(|| io::Error::new(io::ErrorKind::OutOfMemory, "file too large to buffer"))?;
    Ok(buffer)
}

fn measure(file: &mut File) -> io::Result<u64> {
    let length = file.seek(SeekFrom::End(0))?;
    file.rewind()?;
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_small_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, b"Hello, World!")?;

        assert_eq!(read_whole_file(&file_path)?, b"Hello, World!");

        Ok(())
    }

    #[test]
    fn test_read_empty_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("empty.txt");
        fs::File::create(&file_path)?;

        assert_eq!(read_whole_file(&file_path)?.len(), 0);

        Ok(())
    }

    #[test]
    fn test_read_binary_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("data.bin");
        // 0xFF is where a sentinel-based reader would stop
        let data: Vec<u8> = (0..=255).rev().collect();
        fs::write(&file_path, &data)?;

        assert_eq!(read_whole_file(&file_path)?, data);

        Ok(())
    }

    #[test]
    fn test_read_large_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("large.dat");
        let data = vec![0x42u8; 1024 * 1024]; // 1MB
        fs::write(&file_path, &data)?;

        let content = read_whole_file(&file_path)?;
        assert_eq!(content.len(), 1024 * 1024);
        assert!(content.iter().all(|&b| b == 0x42));

        Ok(())
    }

    #[test]
    fn test_buffer_for_unallocatable_length() {
        let err = buffer_for(u64::MAX).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::OutOfMemory);

        assert!(buffer_for(16).is_ok_and(|b| b.is_empty() && b.capacity() >= 16));
    }

    #[test]
    fn test_read_oversized_sparse_file_fails_cleanly() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("sparse.img");
        // Costs no disk blocks; filesystems with a smaller size limit skip
        if fs::File::create(&file_path)?.set_len(1 << 62).is_err() {
            return Ok(());
        }

        let err = read_whole_file(&file_path).unwrap_err();

        assert!(matches!(err, FsError::Io { op: "read", .. }), "{err}");
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::OutOfMemory)
        );

        Ok(())
    }

    #[test]
    fn test_read_nonexistent_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;

        let err = read_whole_file(temp_dir.path().join("nonexistent.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        Ok(())
    }

    #[test]
    fn test_read_directory_is_not_found() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;

        let err = read_whole_file(temp_dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        Ok(())
    }

    #[test]
    fn test_read_to_string() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let text = temp_dir.path().join("text");
        let binary = temp_dir.path().join("binary");
        fs::write(&text, "héllo")?;
        fs::write(&binary, [0xff, 0xfe, 0x00])?;

        assert_eq!(read_whole_file_to_string(&text)?, "héllo");

        let err = read_whole_file_to_string(&binary).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::InvalidData)
        );

        Ok(())
    }
}
