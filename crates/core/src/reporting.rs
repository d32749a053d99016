//! Progress and fatal-error reporting helpers for host applications
//!
//! Companion utilities the simulation host uses for operator-facing status
//! output. The vector math core never calls into this module. Output goes
//! through `tracing`, so installing (and timestamping) a subscriber is the
//! host's responsibility.

use tracing::{error, info};

const FATAL_HEAD: &str = "FATAL ERROR: program abort =====> ";
const FATAL_TAIL: &str = " <===== FATAL ERROR";
const SEPARATOR_LEN: usize = 80;

/// Emit a progress message when verbose reporting is enabled.
///
/// With `is_verbose` false this is a no-op, so call sites can pass their
/// verbosity flag straight through.
pub fn progress_msg(is_verbose: bool, msg: &str) {
    if is_verbose {
        progress_msg_core(msg);
    }
}

/// Emit a progress message unconditionally.
///
/// Ordinary messages get a closing period; separator lines (empty, or a
/// full-width run of `-` or `=`) pass through untouched.
pub fn progress_msg_core(msg: &str) {
    if is_separator(msg) {
        info!("Progress update {msg}");
    } else {
        info!("Progress update {msg}.");
    }
}

/// Terminate the application immediately.
///
/// Logs the framed fatal banner at error level and exits the process with
/// status 1. Never returns.
pub fn terminate_fatal(error_msg: &str) -> ! {
    error!("{FATAL_HEAD}");
    error!("{FATAL_HEAD}{error_msg}{FATAL_TAIL}");
    error!("{FATAL_HEAD}");
    std::process::exit(1);
}

fn is_separator(msg: &str) -> bool {
    msg.is_empty()
        || (msg.len() == SEPARATOR_LEN
            && (msg.bytes().all(|b| b == b'-') || msg.bytes().all(|b| b == b'=')))
}
