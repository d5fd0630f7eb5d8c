//! Main entry point for the `findu` CLI application.
//!
//! `findu` recursively enumerates regular files under a root directory,
//! applies the configured filters, and either prints each match or runs an
//! external program on it.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Delegates traversal to [`findu::scan::walk`]
//! - Evaluates each regular file through [`findu::filter::passes`] and
//!   dispatches matches via [`findu::exec::dispatch`]
//!
//! # Exit behavior
//! Configuration errors (missing path, malformed flag value, unknown flag)
//! are fatal before any traversal and exit non-zero with usage text. Errors
//! during the walk (unreadable directory, vanished file, failing child) are
//! reported to stderr and skipped; they never fail the run.

use anyhow::Result;
use clap::Parser;
use findu::cli::Args;
use findu::{exec, filter, scan};

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse args → walk → filter → dispatch, one file at a time.
    scan::walk(&args.path, |path, entry| {
        if filter::passes(path, entry, &args) {
            exec::dispatch(path, &args);
        }
    });

    Ok(())
}
