//! Tunables for tree removal and file copying
//!
//! `FsConfig` groups the few knobs the operations in this crate take. The
//! convenience functions (`copy_file`, `remove_directory_tree`) use
//! [`FsConfig::default`]; the `*_with` variants take an explicit config.
//!
//! ```rust
//! use rootfs_utils::{FsConfig, RemovalPolicy};
//!
//! let config = FsConfig::default()
//!     .with_removal_policy(RemovalPolicy::BestEffort)
//!     .with_max_open_dirs(16);
//! assert_eq!(config.max_open_dirs, 16);
//! ```

/// Default cap on directory handles held open during tree removal
pub const DEFAULT_MAX_OPEN_DIRS: usize = 32;

/// Default I/O buffer size (in bytes) used for chunked copies.
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 64 * 1024; // 64KB buffer

/// What tree removal does when a single entry cannot be removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Stop at the first failure; unvisited entries stay on disk
    #[default]
    AbortOnFirstError,
    /// Keep going, then report every entry that could not be removed
    BestEffort,
}

/// Configuration shared by the tree and copy operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsConfig {
    /// Maximum simultaneously open directory handles while descending
    pub max_open_dirs: usize,
    /// Failure handling for tree removal
    pub removal_policy: RemovalPolicy,
    /// Block size for file copies; 0 selects the default
    pub copy_buffer_size: usize,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            max_open_dirs: DEFAULT_MAX_OPEN_DIRS,
            removal_policy: RemovalPolicy::default(),
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
        }
    }
}

impl FsConfig {
    /// Set the directory handle cap used during tree removal
    #[must_use]
    pub const fn with_max_open_dirs(mut self, max_open_dirs: usize) -> Self {
        self.max_open_dirs = max_open_dirs;
        self
    }

    /// Set the tree removal failure policy
    #[must_use]
    pub const fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Set the copy block size
    #[must_use]
    pub const fn with_copy_buffer_size(mut self, size: usize) -> Self {
        self.copy_buffer_size = size;
        self
    }

    /// Copy block size with the zero case resolved to the default
    #[must_use]
    pub const fn effective_copy_buffer_size(&self) -> usize {
        if self.copy_buffer_size == 0 {
            DEFAULT_COPY_BUFFER_SIZE
        } else {
            self.copy_buffer_size
        }
    }

    /// Directory handle cap, never below one
    #[must_use]
    pub const fn effective_max_open_dirs(&self) -> usize {
        if self.max_open_dirs == 0 {
            1
        } else {
            self.max_open_dirs
        }
    }
}
