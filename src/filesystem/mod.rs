//! Whole-file I/O
//!
//! Read an entire regular file into memory, or write a buffer to a path,
//! as a single unit.

pub mod read;
pub mod write;

pub use read::{read_whole_file, read_whole_file_to_string};
pub use write::write_whole_file;
