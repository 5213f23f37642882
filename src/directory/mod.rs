//! Directory tree creation and removal
//!
//! - [`ensure_directory_tree`]: `mkdir -p` with an explicit mode
//! - [`remove_directory_tree`]: `rm -r` without following symlinks
//!
//! Neither operation is transactional. A failure part-way leaves whatever was
//! already created or removed in place. Both are check-then-act sequences of
//! independent syscalls, so concurrent callers working on overlapping paths
//! must serialize externally.

pub mod create;
pub mod remove;

pub use create::ensure_directory_tree;
pub use remove::{remove_directory_tree, remove_directory_tree_with};
