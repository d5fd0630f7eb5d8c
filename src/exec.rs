//! Action dispatcher for matched files.
//!
//! For every file that passed the filter set, [`dispatch`] either prints the
//! path to stdout (the default action) or runs the configured program with
//! the matched path as its single argument and waits for it to finish.
//!
//! The child inherits the parent's environment. Spawn failure, a non-zero
//! exit code, and termination by signal are distinguished as separate
//! outcomes, each reported as one diagnostic line on stderr; none of them
//! stops the walk. At most one child is ever outstanding because the
//! dispatcher blocks until the current one terminates.

use crate::cli::Args;
use std::ffi::CStr;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::Command;

/// Upper bound on the combined byte length of the program path and the
/// matched file path handed to the child.
pub const EXEC_ARGS_BUF_SZ: usize = 1024;

/// How dispatching one matched file ended.
///
/// # Variants
/// * `Printed` - No program configured; the path went to stdout
/// * `ArgsTooLong` - Argument list exceeded [`EXEC_ARGS_BUF_SZ`], file skipped
/// * `SpawnFailed` - The program could not be started
/// * `Interrupted` - The wait for the child was interrupted
/// * `Exited(code)` - The child exited normally; non-zero codes are reported
/// * `Signaled(signal)` - The child was terminated by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Printed,
    ArgsTooLong,
    SpawnFailed,
    Interrupted,
    Exited(i32),
    Signaled(i32),
}

/// Executes the configured action for one matched file.
///
/// Every outcome returns control to the traversal; no branch aborts the
/// overall walk.
pub fn dispatch(path: &Path, args: &Args) -> ActionOutcome {
    let Some(program) = &args.exec else {
        println!("{}", path.display());
        return ActionOutcome::Printed;
    };

    // Two NUL terminators accounted for, as in an execve argv buffer.
    let arg_bytes = program.as_os_str().len() + path.as_os_str().len() + 2;
    if arg_bytes > EXEC_ARGS_BUF_SZ {
        eprintln!(
            "findu: combined length of {} and {} exceeds {} bytes, skipping",
            program.display(),
            path.display(),
            EXEC_ARGS_BUF_SZ
        );
        return ActionOutcome::ArgsTooLong;
    }

    let status = match Command::new(program).arg(path).status() {
        Ok(status) => status,
        Err(err) if err.kind() == io::ErrorKind::Interrupted => {
            eprintln!("findu: interrupted while waiting for {}", program.display());
            return ActionOutcome::Interrupted;
        }
        Err(err) => {
            eprintln!("findu: cannot run {}: {}", program.display(), err);
            return ActionOutcome::SpawnFailed;
        }
    };

    if let Some(signal) = status.signal() {
        eprintln!(
            "findu: {} was killed by {}",
            program.display(),
            signal_name(signal)
        );
        return ActionOutcome::Signaled(signal);
    }

    let code = status.code().unwrap_or(0);
    if code != 0 {
        eprintln!("findu: child process exited with code {}", code);
    }
    ActionOutcome::Exited(code)
}

/// Human-readable name for a terminating signal, e.g. "Killed" for SIGKILL.
fn signal_name(signal: i32) -> String {
    let ptr = unsafe { libc::strsignal(signal) };
    if ptr.is_null() {
        return format!("signal {signal}");
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}
