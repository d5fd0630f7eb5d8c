//! Filter set for candidate files.
//!
//! [`passes`] AND-combines the optional predicates from [`Args`], evaluated
//! in a fixed order so that the checks needing no extra I/O (name, inode)
//! run before the `stat`-backed ones (size, hard-link count). The metadata
//! query only happens when a size or link filter is actually configured.
//!
//! A metadata query failure is reported to stderr and treated as
//! non-matching for that file; it never aborts the walk.

use crate::cli::Args;
use crate::data::DirEntry;
use crate::utils::file_meta;
use std::ffi::OsStr;
use std::path::Path;

/// Evaluates every configured filter against one regular file.
///
/// # Arguments
/// * `path` - Full path of the file, used for the metadata query
/// * `entry` - The decoded directory entry (name, inode)
/// * `args` - The configuration holding the optional filters
///
/// # Returns
/// `true` when all configured filters pass; with no filters configured,
/// every regular file passes.
pub fn passes(path: &Path, entry: &DirEntry, args: &Args) -> bool {
    if let Some(name) = &args.name {
        if entry.name.as_os_str() != OsStr::new(name) {
            return false;
        }
    }

    if let Some(inum) = args.inum {
        if entry.ino != inum {
            return false;
        }
    }

    if args.size.is_none() && args.nlinks.is_none() {
        return true;
    }

    let meta = match file_meta(path) {
        Ok(meta) => meta,
        Err(err) => {
            eprintln!("findu: cannot stat {}: {}", path.display(), err);
            return false;
        }
    };

    if let Some(size) = args.size {
        if !size.matches(meta.size) {
            return false;
        }
    }

    if let Some(nlinks) = args.nlinks {
        if meta.nlink != nlinks {
            return false;
        }
    }

    true
}
