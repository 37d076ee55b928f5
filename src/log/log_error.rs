use std::{fmt, io};

/// Failure raised by a logging call.
///
/// The line is lost when this is returned: nothing is retried or buffered,
/// and the failure is never logged through the same logger.
#[derive(Debug)]
pub enum LogError {
    /// The sink rejected or failed the write of a formatted line.
    SinkWrite(io::Error),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::SinkWrite(e) => write!(f, "log sink write failed: {e}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::SinkWrite(e) => Some(e),
        }
    }
}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        Self::SinkWrite(e)
    }
}
