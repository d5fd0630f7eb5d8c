//! Library crate for findu
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! `findu` is a minimal `find`-style utility: given a root directory and a
//! set of optional filters, it walks the tree breadth-first over raw
//! directory entries and prints each matching regular file, or hands it to
//! an external program.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions (the configuration object)
//! - [`data`]: Core data structures (`DirEntry`, `EntryType`, `FileMeta`)
//! - [`dirent`]: Decoder for raw `getdents64` record buffers
//! - [`scan`]: Breadth-first file system traversal
//! - [`filter`]: AND-combined optional match predicates
//! - [`exec`]: Per-match action (print, or spawn-and-wait)
//! - [`utils`]: `stat`-backed metadata helper

pub mod cli;
pub mod data;
pub mod dirent;
pub mod exec;
pub mod filter;
pub mod scan;
pub mod utils;

pub use cli::{Args, SizeFilter, SizeOp};
pub use data::{DirEntry, EntryType, FileMeta};
