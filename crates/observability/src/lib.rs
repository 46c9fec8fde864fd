//! Tracing/logging setup shared by the binaries.
//!
//! Libraries only emit `tracing` events; installing a subscriber is the
//! binary's job.

/// Initialize process-wide tracing in the given log encoding.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, LogFormat};
