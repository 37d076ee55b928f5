use std::{fmt::Display, io::Write};

use chrono::Local;

use crate::log::{log_error::LogError, log_level::LogLevel, log_line::LogLine, logger::Logger};

/// Logger bound to a byte sink and a fixed prefix.
///
/// Every call stamps the current local time, renders one [`LogLine`] in
/// memory and hands it to the sink with a single `write_all`. Nothing is
/// buffered between calls and the sink is never flushed or closed here; its
/// lifecycle belongs to whoever created it.
///
/// To log into a sink owned elsewhere, bind a reference: `&mut Vec<u8>`,
/// `&File` and `&Stdout` all implement [`Write`].
///
/// Lines from several loggers sharing one sink only stay whole if the sink
/// serializes individual writes (as `Stdout` and `File` do).
///
/// # Example
///
/// ```
/// use linelog::{DefaultLogger, Logger};
///
/// let mut out = Vec::new();
/// let mut logger = DefaultLogger::new(&mut out, "api");
/// logger.info(&[&"listening on", &8080]).unwrap();
/// drop(logger);
///
/// let line = String::from_utf8(out).unwrap();
/// assert!(line.starts_with("api "));
/// assert!(line.ends_with(" [INFO] listening on 8080\n"));
/// ```
#[derive(Debug)]
pub struct DefaultLogger<W: Write> {
    sink: W,
    prefix: String,
}

impl<W: Write> DefaultLogger<W> {
    /// Binds `sink` and `prefix`. Never fails; an empty prefix is allowed.
    pub fn new(sink: W, prefix: impl Into<String>) -> Self {
        Self {
            sink,
            prefix: prefix.into(),
        }
    }

    /// The prefix written at the start of every line.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Shared access to the sink.
    #[must_use]
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Releases the logger and gives the sink back.
    #[must_use]
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> Logger for DefaultLogger<W> {
    fn log(&mut self, level: LogLevel, args: &[&dyn Display]) -> Result<(), LogError> {
        let now = Local::now().naive_local();
        let line = LogLine::new(now, &self.prefix, level, args).to_string();
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::io;

    /// Sink that fails every write with the configured error kind.
    struct FailingSink(io::ErrorKind);

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink that records how many write calls it received.
    #[derive(Default)]
    struct CountingSink {
        writes: usize,
        bytes: Vec<u8>,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn each_call_is_a_single_write() {
        let mut logger = DefaultLogger::new(CountingSink::default(), "p");
        logger.info(&[&"a", &1]).unwrap();
        logger.error(&[]).unwrap();

        let sink = logger.into_sink();
        assert_eq!(sink.writes, 2);
        let text = String::from_utf8(sink.bytes).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("[ERROR]\n"));
    }

    #[test]
    fn sink_failure_is_returned() {
        let mut logger = DefaultLogger::new(FailingSink(io::ErrorKind::BrokenPipe), "");
        match logger.warn(&[&"lost"]) {
            Err(LogError::SinkWrite(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected SinkWrite, got: {:?}", other),
        }
    }

    #[test]
    fn zero_length_write_is_a_failure() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Ok(0)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = DefaultLogger::new(Full, "").debug(&[]).unwrap_err();
        let LogError::SinkWrite(e) = err;
        assert_eq!(e.kind(), io::ErrorKind::WriteZero);
    }

    #[test]
    fn accessors_expose_binding() {
        let logger = DefaultLogger::new(Vec::new(), String::from("svc"));
        assert_eq!(logger.prefix(), "svc");
        assert!(logger.sink().is_empty());
    }
}
