use std::{fmt, io, path::PathBuf};

/// Failure while loading configuration or opening the configured sink.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// `[Logging] output` was set to an empty value.
    EmptyOutput,
    /// The output file could not be opened for appending.
    OpenOutput { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            Read { path, source } => {
                write!(f, "error reading config {}: {source}", path.display())
            }
            EmptyOutput => write!(f, "[Logging] output must not be empty"),
            OpenOutput { path, source } => {
                write!(f, "cannot open log output {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } | ConfigError::OpenOutput { source, .. } => {
                Some(source)
            }
            ConfigError::EmptyOutput => None,
        }
    }
}
