//! Tracing/logging initialization.
//!
//! Logs go to stderr so that session output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Pick the log filter directive.
///
/// `RUST_LOG` wins when set, then `--verbose`, then the configured level.
pub fn filter_directive(rust_log: Option<&str>, verbose: bool, configured: &str) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(verbose: bool, configured: &str) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
