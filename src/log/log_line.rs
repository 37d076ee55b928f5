use std::fmt;

use chrono::NaiveDateTime;

use crate::log::log_level::LogLevel;

/// `strftime` pattern for the date and time fields of a line.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// One formatted log line, rendered through `Display`.
///
/// Layout: `[<prefix>[ ]]YYYY/MM/DD HH:MM:SS.ffffff [LEVEL][ arg1 ... argN]\n`
///
/// A non-empty prefix is written verbatim, followed by a space unless it
/// already ends in whitespace. Arguments are joined by single spaces; with no
/// arguments the line ends right after the level tag.
#[derive(Clone, Copy)]
pub struct LogLine<'a> {
    timestamp: NaiveDateTime,
    prefix: &'a str,
    level: LogLevel,
    args: &'a [&'a dyn fmt::Display],
}

impl<'a> LogLine<'a> {
    /// Builds a line from its parts. `timestamp` is local wall-clock time.
    #[must_use]
    pub fn new(
        timestamp: NaiveDateTime,
        prefix: &'a str,
        level: LogLevel,
        args: &'a [&'a dyn fmt::Display],
    ) -> Self {
        Self {
            timestamp,
            prefix,
            level,
            args,
        }
    }
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefix.is_empty() {
            f.write_str(self.prefix)?;
            if !self.prefix.ends_with(char::is_whitespace) {
                f.write_str(" ")?;
            }
        }

        write!(
            f,
            "{} [{}]",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level.tag()
        )?;

        for arg in self.args {
            write!(f, " {arg}")?;
        }

        f.write_str("\n")
    }
}

impl fmt::Debug for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogLine")
            .field("timestamp", &self.timestamp)
            .field("prefix", &self.prefix)
            .field("level", &self.level)
            .field("args", &self.args.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(7, 5, 3, 42)
            .unwrap()
    }

    fn render(prefix: &str, level: LogLevel, args: &[&dyn fmt::Display]) -> String {
        LogLine::new(at(), prefix, level, args).to_string()
    }

    #[test]
    fn timestamp_is_zero_padded_with_micros() {
        assert_eq!(
            render("", LogLevel::Info, &[&"ready"]),
            "2024/03/09 07:05:03.000042 [INFO] ready\n"
        );
    }

    #[test]
    fn no_args_ends_after_tag() {
        assert_eq!(
            render("", LogLevel::Warn, &[]),
            "2024/03/09 07:05:03.000042 [WARN]\n"
        );
    }

    #[test]
    fn mixed_args_are_joined_by_single_spaces() {
        assert_eq!(
            render("", LogLevel::Debug, &[&"1", &2, &3.5, &'x', &true]),
            "2024/03/09 07:05:03.000042 [DEBUG] 1 2 3.5 x true\n"
        );
    }

    #[test]
    fn empty_arg_still_gets_separator() {
        assert_eq!(
            render("", LogLevel::Error, &[&""]),
            "2024/03/09 07:05:03.000042 [ERROR] \n"
        );
    }

    #[test]
    fn bare_prefix_gets_one_space() {
        assert_eq!(
            render("svc", LogLevel::Info, &[&"up"]),
            "svc 2024/03/09 07:05:03.000042 [INFO] up\n"
        );
    }

    #[test]
    fn prefix_with_trailing_space_is_verbatim() {
        assert_eq!(
            render("myprefix ", LogLevel::Warn, &[]),
            "myprefix 2024/03/09 07:05:03.000042 [WARN]\n"
        );
    }

    #[test]
    fn tabbed_prefix_is_not_padded() {
        assert_eq!(
            render("svc\t", LogLevel::Info, &[]),
            "svc\t2024/03/09 07:05:03.000042 [INFO]\n"
        );
    }
}
