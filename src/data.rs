//! Data structures for representing file system entries.
//!
//! This module defines the core data structures shared by the entry decoder,
//! the traversal engine, and the filter set: decoded directory entries and
//! the per-file metadata queried for size/link filters.

use std::ffi::OsString;

/// A single decoded directory entry.
///
/// Produced by the entry decoder for one raw record; only valid for the
/// iteration over one read buffer and never retained by the walk.
///
/// # Fields
/// * `name` - The entry name, never `.` or `..`
/// * `ino` - The inode number reported by the directory record
/// * `entry_type` - Type tag decoded from the record's `d_type` byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub ino: u64,
    pub entry_type: EntryType,
}

/// Represents the type of file system entry.
///
/// # Variants
/// * `Dir` - A directory, to be enqueued for traversal
/// * `File` - A regular file, to be evaluated against the filters
/// * `Other` - Anything else (device, symlink, socket, fifo, unknown); ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Dir,
    File,
    Other,
}

impl EntryType {
    /// Maps a raw `d_type` byte from a directory record to an entry type.
    pub fn from_d_type(d_type: u8) -> Self {
        match d_type {
            libc::DT_DIR => EntryType::Dir,
            libc::DT_REG => EntryType::File,
            _ => EntryType::Other,
        }
    }
}

/// Per-file metadata from a `stat` call, queried only when a size or
/// hard-link filter is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    pub size: u64,
    pub nlink: u64,
}
