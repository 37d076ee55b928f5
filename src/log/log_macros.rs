//! Variadic call-site macros for any [`Logger`](crate::log::logger::Logger).
//!
//! Each argument may be of any `Display` type; the macro borrows them into a
//! `&[&dyn Display]` slice so no formatting happens before the logger runs.
//! Every macro evaluates to the logger's `Result<(), LogError>`.
//!
//! ```
//! use linelog::{log_info, log_warn, DefaultLogger};
//!
//! let mut logger = DefaultLogger::new(Vec::new(), "");
//! log_info!(logger, "1", 2, 3).unwrap();
//! log_warn!(logger).unwrap();
//! ```

// ============================================================================
// GENERIC WORKER
// ============================================================================

#[macro_export]
macro_rules! log_at {
    ($logger:expr, $lvl:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::log::logger::Logger as _;
        $logger.log($lvl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    }};
}

// ============================================================================
// LEVEL-SPECIFIC MACROS
// ============================================================================

#[macro_export]
macro_rules! log_debug { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Debug $(, $arg)*) } }

#[macro_export]
macro_rules! log_info  { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Info $(, $arg)*) } }

#[macro_export]
macro_rules! log_warn  { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Warn $(, $arg)*) } }

#[macro_export]
macro_rules! log_error { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Error $(, $arg)*) } }
