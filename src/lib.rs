//! # rootfs-utils
//!
//! Filesystem primitives for inspecting, creating, copying and tearing down
//! the host directory trees that back container root filesystems:
//!
//! - **Classification**: `is_regular_file`, `is_directory`, `is_symlink`, ...
//! - **Metadata**: `entry_metadata` / `symlink_entry_metadata` with distinct
//!   failure kinds
//! - **Identifiers**: `"{uid}.{dev}.{ino}"` keys via `generate_identifier`
//! - **Whole-file I/O**: `read_whole_file`, `write_whole_file`
//! - **Copying**: `copy_file` preserves permission bits
//! - **Trees**: `ensure_directory_tree` and `remove_directory_tree`
//! - **Resolution**: `resolve_base_directory` finds the deepest existing
//!   ancestor of a path under a container root
//!
//! All operations are synchronous and hold no state between calls.
//! Diagnostics go through [`tracing`]; the crate never installs a subscriber,
//! so output goes wherever the caller's active dispatcher sends it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rootfs_utils::{copy_file, ensure_directory_tree, is_directory, resolve_base_directory};
//!
//! fn main() -> rootfs_utils::Result<()> {
//!     let root = "/containers/c1/rootfs";
//!     ensure_directory_tree(format!("{root}/etc"), 0o755)?;
//!     copy_file("/etc/resolv.conf", format!("{root}/etc/resolv.conf"))?;
//!
//!     let base = resolve_base_directory(root, "/usr/local/bin")?;
//!     assert!(is_directory(format!("{root}{}", base.display())));
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Nothing here locks. Existence checks and the operations that follow them
//! are separate syscalls, so a path can change between the two. Callers that
//! share a container root across threads or processes must serialize access
//! themselves.

pub mod classify;
pub mod config;
pub mod copy;
pub mod directory;
pub mod error;
pub mod filesystem;
pub mod identifier;
pub mod metadata;
pub mod path;
pub mod resolver;

// Re-export main types
pub use classify::{
    is_block_device, is_directory, is_executable_by_owner, is_fifo, is_owned_by,
    is_regular_file, is_symlink,
};
pub use config::{FsConfig, RemovalPolicy};
pub use copy::{copy_file, copy_file_with};
pub use directory::{ensure_directory_tree, remove_directory_tree, remove_directory_tree_with};
pub use error::{ErrorKind, FsError, RemovalFailure, Result};
pub use filesystem::{read_whole_file, read_whole_file_to_string, write_whole_file};
pub use identifier::{generate_identifier, Identifier};
pub use metadata::{entry_metadata, symlink_entry_metadata, EntryKind, EntryMetadata};
pub use path::join_path;
pub use resolver::resolve_base_directory;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
