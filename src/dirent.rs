//! Entry decoder for raw `getdents64` buffers.
//!
//! A single `getdents64` call fills a fixed-size byte buffer with a packed
//! run of variable-length `linux_dirent64` records:
//!
//! ```text
//! offset  0  d_ino     u64
//! offset  8  d_off     i64
//! offset 16  d_reclen  u16   total record length, including padding
//! offset 18  d_type    u8
//! offset 19  d_name    NUL-terminated bytes, padded out to d_reclen
//! ```
//!
//! [`entries`] walks the filled prefix of such a buffer and yields one
//! [`DirEntry`] per record, lazily. All offsets are bounds-checked against
//! the slice; no raw pointer arithmetic is exposed to callers. Records for
//! `.` and `..` are skipped. A record whose header does not fit, whose
//! `d_reclen` is shorter than the header, or whose `d_reclen` overruns the
//! filled length terminates the iteration: a malformed tail is treated as
//! end-of-buffer, not as an error.

use crate::data::{DirEntry, EntryType};
use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

/// Size of the buffer handed to each `getdents64` call.
pub const DIRENT_BUF_SZ: usize = 1024;

/// Fixed part of a `linux_dirent64` record, up to and including `d_type`.
const HEADER_LEN: usize = 19;

/// Returns a lazy iterator over the records in the filled prefix of a
/// `getdents64` buffer.
///
/// # Arguments
/// * `buf` - The first `nread` bytes of the read buffer
pub fn entries(buf: &[u8]) -> Entries<'_> {
    Entries { buf, pos: 0 }
}

/// Iterator over decoded directory entries, created by [`entries`].
pub struct Entries<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl Iterator for Entries<'_> {
    type Item = DirEntry;

    fn next(&mut self) -> Option<DirEntry> {
        loop {
            let rec = self.buf.get(self.pos..)?;
            if rec.len() < HEADER_LEN {
                return None;
            }

            let ino = u64::from_ne_bytes(rec[0..8].try_into().ok()?);
            let reclen = u16::from_ne_bytes(rec[16..18].try_into().ok()?) as usize;
            if reclen < HEADER_LEN || reclen > rec.len() {
                return None;
            }

            let d_type = rec[18];
            let name_field = &rec[HEADER_LEN..reclen];
            let name_len = name_field
                .iter()
                .position(|&b| b == 0)
                .unwrap_or(name_field.len());
            let name = &name_field[..name_len];

            self.pos += reclen;

            if name.is_empty() || name == b"." || name == b".." {
                continue;
            }

            return Some(DirEntry {
                name: OsString::from_vec(name.to_vec()),
                ino,
                entry_type: EntryType::from_d_type(d_type),
            });
        }
    }
}
