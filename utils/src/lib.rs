//! Shared utilities for veridao binaries.

pub mod logging;

pub use logging::{init_logging, init_tracing, LogFormat, LoggingError};
