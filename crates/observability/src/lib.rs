//! Tracing/logging setup shared by courier binaries.

pub use self::tracing::{LogFormat, directive_for_verbosity, init};

/// Tracing configuration (filters, output format).
pub mod tracing;
