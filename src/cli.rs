//! CLI interface definitions for the `findu` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`SizeFilter`] / [`SizeOp`]: the parsed form of the `--size [-|=|+]N` flag
//!
//! The `Args` struct is the validated configuration consumed by the scan,
//! filter, and exec modules. All filters are independently optional and
//! combine with AND semantics; only the search path is mandatory.
//!
//! # Example
//!
//! ```bash
//! findu /var/log --name syslog --size +4096 --exec /usr/bin/gzip
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `findu` file search tool.
///
/// Each filter field is `None` when the corresponding flag is absent, in
/// which case it imposes no constraint. Every configured filter has to pass
/// for a file to reach the action stage.
#[derive(Parser, Debug)]
#[command(name = "findu", version, about)]
pub struct Args {
    /// Directory to search from
    #[arg(value_name = "PATH", value_parser = parse_root)]
    pub path: PathBuf,

    /// Only match files with this inode number
    #[arg(long, value_name = "N")]
    pub inum: Option<u64>,

    /// Only match files whose name equals STR exactly
    #[arg(long, value_name = "STR")]
    pub name: Option<String>,

    /// Only match files by size in bytes: -N (at most), N or =N (exactly), +N (at least)
    #[arg(long, value_name = "[-|=|+]N", allow_hyphen_values = true, value_parser = parse_size_filter)]
    pub size: Option<SizeFilter>,

    /// Only match files with exactly N hard links
    #[arg(long, value_name = "N")]
    pub nlinks: Option<u64>,

    /// Run PROGRAM with each matching path as its single argument instead of printing
    #[arg(long, value_name = "PROGRAM")]
    pub exec: Option<PathBuf>,
}

/// Comparison kind for the size filter.
///
/// # Variants
/// * `Le` - passes when the file size is at most the threshold (`-N`)
/// * `Eq` - passes when the file size equals the threshold (`N` or `=N`)
/// * `Ge` - passes when the file size is at least the threshold (`+N`)
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SizeOp {
    Le,
    Eq,
    Ge,
}

/// A parsed `--size` argument: a comparison kind plus a byte threshold.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SizeFilter {
    pub op: SizeOp,
    pub bytes: u64,
}

impl SizeFilter {
    /// Tests a file size against this filter.
    ///
    /// A file whose size equals the threshold passes all three comparison
    /// kinds; `Le` and `Ge` are inclusive.
    pub fn matches(&self, size: u64) -> bool {
        match self.op {
            SizeOp::Le => size <= self.bytes,
            SizeOp::Eq => size == self.bytes,
            SizeOp::Ge => size >= self.bytes,
        }
    }
}

/// Parses the `--size` argument grammar `[-|=|+]N`.
///
/// A bare number means exact match. Any other leading character is a
/// configuration error and is rejected here, before any traversal starts.
fn parse_size_filter(raw: &str) -> Result<SizeFilter, String> {
    let (op, digits) = match raw.as_bytes().first().copied() {
        Some(b'-') => (SizeOp::Le, &raw[1..]),
        Some(b'=') => (SizeOp::Eq, &raw[1..]),
        Some(b'+') => (SizeOp::Ge, &raw[1..]),
        Some(b'0'..=b'9') => (SizeOp::Eq, raw),
        _ => return Err(format!("unexpected size '{raw}', expected [-|=|+]N")),
    };

    let bytes = digits
        .parse::<u64>()
        .map_err(|_| format!("invalid size value '{raw}'"))?;

    Ok(SizeFilter { op, bytes })
}

/// Rejects an empty search path at parse time.
fn parse_root(raw: &str) -> Result<PathBuf, String> {
    if raw.is_empty() {
        return Err("search path must not be empty".to_string());
    }
    Ok(PathBuf::from(raw))
}
