//! Logger module
//!
//! Startup announcement, per-request access log lines, and error/warning
//! output. Info goes to stdout, errors and warnings to stderr.

mod format;

pub use format::AccessLogEntry;

/// Print the startup announcement.
///
/// Exactly two lines: where the server is reachable, and that CORS is wide
/// open. Printed once, after the listener is bound.
pub fn log_server_start(port: u16) {
    println!("Server running on http://127.0.0.1:{port}/");
    println!("CORS headers enabled - allowing all origins");
}

/// Write one access log line for a completed request.
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_clf());
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
