//! Scratch container roots for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary container root with a small FHS-like layout
pub struct ScratchRoot {
    _temp: TempDir,
    root: PathBuf,
}

impl ScratchRoot {
    /// Create an empty root directory
    pub fn empty() -> anyhow::Result<Self> {
        let temp = TempDir::new()?;
        let root = temp.path().join("rootfs");
        fs::create_dir(&root)?;
        Ok(Self { _temp: temp, root })
    }

    /// Create a root holding `usr/bin`, `etc/hostname` and an `etc` symlink
    #[allow(dead_code)]
    pub fn populated() -> anyhow::Result<Self> {
        let scratch = Self::empty()?;
        fs::create_dir_all(scratch.root.join("usr/bin"))?;
        fs::create_dir_all(scratch.root.join("etc"))?;
        fs::write(scratch.root.join("etc/hostname"), "c1\n")?;
        fs::write(scratch.root.join("usr/bin/tool"), b"\x7fELF\x00\xff")?;
        std::os::unix::fs::symlink("usr/bin", scratch.root.join("bin"))?;
        Ok(scratch)
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of `relative` inside the root
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Directory next to the root, outside of it
    #[allow(dead_code)]
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.root.with_file_name(name)
    }
}
