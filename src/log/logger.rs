use std::fmt::Display;

use crate::log::{log_error::LogError, log_level::LogLevel};

/// Capability of emitting leveled log lines.
///
/// Implementors provide [`log`](Self::log); the per-level methods forward to
/// it with the matching [`LogLevel`]. Arguments are rendered through
/// `Display` and joined by single spaces.
pub trait Logger {
    /// Formats one line at `level` and writes it to the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::SinkWrite`] if the sink fails the write.
    fn log(&mut self, level: LogLevel, args: &[&dyn Display]) -> Result<(), LogError>;

    /// Emits a `[DEBUG]` line.
    ///
    /// # Errors
    ///
    /// See [`log`](Self::log).
    fn debug(&mut self, args: &[&dyn Display]) -> Result<(), LogError> {
        self.log(LogLevel::Debug, args)
    }

    /// Emits an `[INFO]` line.
    ///
    /// # Errors
    ///
    /// See [`log`](Self::log).
    fn info(&mut self, args: &[&dyn Display]) -> Result<(), LogError> {
        self.log(LogLevel::Info, args)
    }

    /// Emits a `[WARN]` line.
    ///
    /// # Errors
    ///
    /// See [`log`](Self::log).
    fn warn(&mut self, args: &[&dyn Display]) -> Result<(), LogError> {
        self.log(LogLevel::Warn, args)
    }

    /// Emits an `[ERROR]` line.
    ///
    /// # Errors
    ///
    /// See [`log`](Self::log).
    fn error(&mut self, args: &[&dyn Display]) -> Result<(), LogError> {
        self.log(LogLevel::Error, args)
    }
}

impl<L: Logger + ?Sized> Logger for &mut L {
    #[inline]
    fn log(&mut self, level: LogLevel, args: &[&dyn Display]) -> Result<(), LogError> {
        (**self).log(level, args)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[inline]
    fn log(&mut self, level: LogLevel, args: &[&dyn Display]) -> Result<(), LogError> {
        (**self).log(level, args)
    }
}
