//! Utility functions for the `findu` file search tool.
//!
//! Currently this is the thin `stat` wrapper used by the filter set to
//! query per-file metadata. Platform-specific (Unix) by design, matching
//! the raw directory enumeration in [`crate::scan`].

use crate::data::FileMeta;
use libc::stat as libc_stat;
use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Queries size and hard-link count for a file via `stat`.
///
/// # Arguments
/// * `path` - The full path of the candidate file
///
/// # Returns
/// * `io::Result<FileMeta>` - The metadata, or the OS error when the path
///   cannot be stat'ed (e.g. removed between enumeration and evaluation)
pub fn file_meta(path: &Path) -> io::Result<FileMeta> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;

    // Use MaybeUninit to avoid undefined behavior with a zeroed stat struct
    let mut stat_buf = MaybeUninit::<libc::stat>::uninit();
    let result = unsafe { libc_stat(c_path.as_ptr(), stat_buf.as_mut_ptr()) };

    if result != 0 {
        return Err(io::Error::last_os_error());
    }

    let stat_buf = unsafe { stat_buf.assume_init() };
    Ok(FileMeta {
        size: stat_buf.st_size as u64,
        nlink: stat_buf.st_nlink as u64,
    })
}
