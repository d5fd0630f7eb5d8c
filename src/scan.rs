//! File system traversal engine for `findu`.
//!
//! This module handles:
//! - Breadth-first traversal over an explicit FIFO queue of directory paths
//! - Raw directory reads via `libc` `open`/`getdents64` into a fixed buffer
//! - Per-record decoding through [`crate::dirent`]
//! - Skip-and-continue error reporting for unreadable directories
//!
//! The main entry point is [`walk`], which streams every reachable regular
//! file to a caller-supplied callback. Nothing is materialized: each file is
//! evaluated inline as it is discovered, and subdirectories are queued to be
//! visited after all siblings (BFS order).
//!
//! There is no recursion depth limit and no cycle detection; a tree
//! containing a bind-mounted cycle will traverse forever.

use crate::data::{DirEntry, EntryType};
use crate::dirent::{self, DIRENT_BUF_SZ};
use std::collections::VecDeque;
use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Owned directory file descriptor, closed on every exit path.
struct DirFd(libc::c_int);

impl DirFd {
    /// Opens a directory for raw entry reads.
    fn open(path: &Path) -> io::Result<DirFd> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;

        let fd = unsafe {
            libc::open(
                c_path.as_ptr(),
                libc::O_RDONLY | libc::O_DIRECTORY | libc::O_CLOEXEC,
            )
        };
        if fd == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(DirFd(fd))
    }

    /// Fills `buf` with raw directory records via one `getdents64` call.
    ///
    /// Returns the number of bytes filled; 0 means end of directory.
    fn read_entries(&self, buf: &mut [u8]) -> io::Result<usize> {
        let nread = unsafe {
            libc::syscall(
                libc::SYS_getdents64,
                self.0,
                buf.as_mut_ptr(),
                buf.len(),
            )
        };
        if nread < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(nread as usize)
    }
}

impl Drop for DirFd {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.0);
        }
    }
}

/// Walks the directory tree under `root` breadth-first and invokes
/// `on_file` for every regular file discovered.
///
/// # Arguments
/// * `root` - The directory to start from
/// * `on_file` - Callback receiving the full path and the decoded entry of
///   each regular file, in discovery order
///
/// # Error behavior
/// A directory that cannot be opened or read produces one diagnostic line on
/// stderr and its subtree is skipped; the walk always continues with the
/// remaining queued directories. No error aborts the traversal, so this
/// function does not return one.
pub fn walk<F>(root: &Path, mut on_file: F)
where
    F: FnMut(&Path, &DirEntry),
{
    let mut pending: VecDeque<PathBuf> = VecDeque::new();
    pending.push_back(root.to_path_buf());

    let mut buf = [0u8; DIRENT_BUF_SZ];

    while let Some(dir) = pending.pop_front() {
        let fd = match DirFd::open(&dir) {
            Ok(fd) => fd,
            Err(err) => {
                eprintln!("findu: cannot open directory {}: {}", dir.display(), err);
                continue;
            }
        };

        loop {
            let nread = match fd.read_entries(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) => {
                    eprintln!("findu: cannot read directory {}: {}", dir.display(), err);
                    break;
                }
            };

            for entry in dirent::entries(&buf[..nread]) {
                let path = dir.join(&entry.name);
                match entry.entry_type {
                    EntryType::Dir => pending.push_back(path),
                    EntryType::File => on_file(&path, &entry),
                    EntryType::Other => {}
                }
            }
        }
        // fd dropped here, before the next directory is dequeued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::MetadataExt;
    use tempfile::TempDir;

    fn collect(root: &Path) -> Vec<(PathBuf, DirEntry)> {
        let mut seen = Vec::new();
        walk(root, |path, entry| {
            seen.push((path.to_path_buf(), entry.clone()));
        });
        seen
    }

    #[test]
    fn test_walk_finds_every_regular_file_once() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let sub = root.join("sub");
        let deep = sub.join("deep");
        fs::create_dir(&sub).expect("Failed to create sub");
        fs::create_dir(&deep).expect("Failed to create deep");
        fs::write(root.join("top.txt"), "top").expect("Failed to write top.txt");
        fs::write(sub.join("mid.txt"), "mid").expect("Failed to write mid.txt");
        fs::write(deep.join("leaf.txt"), "leaf").expect("Failed to write leaf.txt");

        let seen = collect(root);
        let mut paths: Vec<&PathBuf> = seen.iter().map(|(p, _)| p).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), seen.len(), "no file is visited twice");

        assert_eq!(seen.len(), 3);
        assert!(seen.iter().any(|(p, _)| p == &root.join("top.txt")));
        assert!(seen.iter().any(|(p, _)| p == &sub.join("mid.txt")));
        assert!(seen.iter().any(|(p, _)| p == &deep.join("leaf.txt")));
    }

    #[test]
    fn test_walk_is_breadth_first() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let a = root.join("a");
        let b = root.join("b");
        let a_deep = a.join("deep");
        fs::create_dir(&a).expect("Failed to create a");
        fs::create_dir(&b).expect("Failed to create b");
        fs::create_dir(&a_deep).expect("Failed to create a/deep");
        fs::write(root.join("d1.txt"), "x").expect("Failed to write d1");
        fs::write(a.join("d2a.txt"), "x").expect("Failed to write d2a");
        fs::write(b.join("d2b.txt"), "x").expect("Failed to write d2b");
        fs::write(a_deep.join("d3.txt"), "x").expect("Failed to write d3");

        let seen = collect(root);
        let depths: Vec<usize> = seen
            .iter()
            .map(|(p, _)| p.strip_prefix(root).unwrap().components().count())
            .collect();

        // All files of a directory are seen before any file of a deeper one.
        let mut sorted = depths.clone();
        sorted.sort_unstable();
        assert_eq!(depths, sorted, "file depths are non-decreasing: {depths:?}");
        assert_eq!(depths, vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_walk_yields_only_regular_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let sub = root.join("sub");
        fs::create_dir(&sub).expect("Failed to create sub");
        fs::write(sub.join("real.txt"), "real").expect("Failed to write real.txt");
        std::os::unix::fs::symlink(sub.join("real.txt"), root.join("alias"))
            .expect("Failed to create symlink");

        let seen = collect(root);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, sub.join("real.txt"));
        assert_eq!(seen[0].1.entry_type, EntryType::File);
        assert_eq!(seen[0].1.name, "real.txt");
    }

    #[test]
    fn test_walk_reports_entry_inode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        let file = root.join("inode.txt");
        fs::write(&file, "i").expect("Failed to write inode.txt");

        let want = fs::metadata(&file).expect("Failed to stat").ino();
        let seen = collect(root);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1.ino, want);
    }

    #[test]
    fn test_walk_missing_root_does_not_panic() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let gone = temp_dir.path().join("never-created");

        let seen = collect(&gone);
        assert!(seen.is_empty());
    }

    #[test]
    fn test_walk_survives_subdirectory_deleted_before_open() {
        // A subdirectory can vanish between enumeration and open. Its
        // record is decoded from the already-filled buffer, so it is still
        // enqueued; the later open fails and must not stop the walk.
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let trap = root.join("trap");
        let keeper = root.join("keeper");
        fs::create_dir(&trap).expect("Failed to create trap");
        fs::create_dir(&keeper).expect("Failed to create keeper");
        fs::write(root.join("trigger.txt"), "t").expect("Failed to write trigger.txt");
        fs::write(keeper.join("kept.txt"), "k").expect("Failed to write kept.txt");

        let mut seen = Vec::new();
        walk(root, |path, _entry| {
            // Fires while the root is being read, before any queued
            // subdirectory has been opened.
            if path.file_name().is_some_and(|n| n == "trigger.txt") {
                fs::remove_dir_all(&trap).expect("Failed to remove trap");
            }
            seen.push(path.to_path_buf());
        });

        assert!(seen.contains(&root.join("trigger.txt")));
        assert!(
            seen.contains(&keeper.join("kept.txt")),
            "queued siblings are still visited after a failed open: {seen:?}"
        );
    }

    #[test]
    fn test_walk_handles_directories_larger_than_one_buffer() {
        // Enough entries that a single 1024-byte getdents call cannot
        // return them all.
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        for i in 0..200 {
            fs::write(root.join(format!("file_{i:03}.dat")), "x")
                .expect("Failed to write file");
        }

        let seen = collect(root);
        assert_eq!(seen.len(), 200);
    }
}
