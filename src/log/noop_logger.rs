use std::fmt::Display;

use crate::log::{log_error::LogError, log_level::LogLevel, logger::Logger};

/// Logger that discards every line and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    #[inline]
    fn log(&mut self, _level: LogLevel, _args: &[&dyn Display]) -> Result<(), LogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_level() {
        let mut logger = NoopLogger;
        for level in LogLevel::ALL {
            assert!(logger.log(level, &[&"x", &1]).is_ok());
        }
        assert!(logger.warn(&[]).is_ok());
    }
}
