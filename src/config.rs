//! INI-style configuration for wiring a logger to a destination.
//!
//! ```text
//! # logline.conf
//! [Logging]
//! prefix = "billing"
//! output = ~/logs/billing.log   # or: stdout, stderr
//! ```

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config_error::ConfigError;

/// Section holding the logger settings.
pub const LOGGING_SECTION: &str = "Logging";

/// Where formatted lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    /// Appended to, created if missing.
    File(PathBuf),
}

#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses configuration text. Unrecognised lines are skipped.
    ///
    /// A `#` starts a comment unless it sits inside a quoted value.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let header = line.split_once('#').map_or(line, |(h, _)| h).trim_end();
            if header.starts_with('[') && header.ends_with(']') {
                let name = header[1..header.len() - 1].trim();
                current_section = Some(name.to_string());
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                let value = parse_value(&line[pos + 1..]);

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    /// Section value, then global value, then `default`.
    #[must_use]
    pub fn get_or_default<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key)
            .or_else(|| self.get_global(key))
            .unwrap_or(default)
    }

    /// Prefix for every line; empty when unset.
    #[must_use]
    pub fn log_prefix(&self) -> &str {
        self.get_or_default(LOGGING_SECTION, "prefix", "")
    }

    /// Destination selected by `output`; stderr when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOutput`] if `output` is present but blank.
    pub fn log_output(&self) -> Result<LogOutput, ConfigError> {
        let Some(raw) = self
            .get(LOGGING_SECTION, "output")
            .or_else(|| self.get_global("output"))
        else {
            return Ok(LogOutput::Stderr);
        };

        match raw.trim() {
            "" => Err(ConfigError::EmptyOutput),
            s if s.eq_ignore_ascii_case("stdout") || s == "-" => Ok(LogOutput::Stdout),
            s if s.eq_ignore_ascii_case("stderr") => Ok(LogOutput::Stderr),
            s => Ok(LogOutput::File(expand_path(s))),
        }
    }

    /// Opens the configured destination as a byte sink.
    ///
    /// Missing parent directories of a file output are created.
    ///
    /// # Errors
    ///
    /// Propagates [`log_output`](Self::log_output) errors and returns
    /// [`ConfigError::OpenOutput`] if the file cannot be opened.
    pub fn open_output(&self) -> Result<Box<dyn Write + Send>, ConfigError> {
        match self.log_output()? {
            LogOutput::Stdout => Ok(Box::new(io::stdout())),
            LogOutput::Stderr => Ok(Box::new(io::stderr())),
            LogOutput::File(path) => {
                let open = |path: &Path| -> io::Result<fs::File> {
                    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                        fs::create_dir_all(dir)?;
                    }
                    OpenOptions::new().create(true).append(true).open(path)
                };
                let file = open(path.as_path()).map_err(|source| ConfigError::OpenOutput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

/// Strips an unquoted trailing comment and surrounding quotes.
fn parse_value(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix('"') {
        if let Some(end) = rest.find('"') {
            return rest[..end].to_string();
        }
    }
    let unquoted = raw.split_once(" #").map_or(raw, |(v, _)| v);
    unquoted.trim().trim_matches('"').to_string()
}

/// Expands a leading `~`, `~/` or `~\` to the user's home directory.
///
/// `~user` forms are left untouched, as is everything when no home is set.
fn expand_path(path_str: &str) -> PathBuf {
    let home = || {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
    };

    if path_str == "~" {
        return home().unwrap_or_else(|| PathBuf::from(path_str));
    }

    let rest = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"));
    match rest.zip(home()) {
        Some((rest, home)) => home.join(rest),
        None => PathBuf::from(path_str),
    }
}
