//! Linelog is a minimal leveled line logger.
//!
//! A [`DefaultLogger`] is bound to any [`std::io::Write`] sink and a prefix.
//! Each call writes exactly one line:
//!
//! ```text
//! [<prefix> ]YYYY/MM/DD HH:MM:SS.ffffff [LEVEL] arg1 arg2 ... argN
//! ```
//!
//! There is no filtering, buffering or rotation: every call is formatted and
//! written inline, and write failures are returned to the caller.

/// Configuration file loading and sink selection.
pub mod config;
/// Errors raised while loading configuration or opening a sink.
pub mod config_error;
/// Leveled logger, line format and call-site macros.
pub mod log;

pub use log::{DefaultLogger, LogError, LogLevel, Logger, NoopLogger};
