//! Writes one log line using the sink and prefix from a config file.
//!
//! Usage: `logline [--config PATH] LEVEL [ARGS...]`

use std::fmt::Display;
use std::io::{self, Write};
use std::{env, process};

use linelog::config::Config;
use linelog::config_error::ConfigError;
use linelog::{DefaultLogger, LogLevel, Logger};

const DEFAULT_CONFIG: &str = "logline.conf";

fn usage(bin: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {bin} [--config PATH] LEVEL [ARGS...]");
    eprintln!();
    eprintln!("LEVEL is one of debug, info, warn, error.");
    eprintln!("Without --config, ./{DEFAULT_CONFIG} is used when present.");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let bin = args.first().map_or("logline", String::as_str);

    // --- Parse CLI args ----------------------------------------------------
    let (config_path, rest) = match args.get(1).map(String::as_str) {
        Some("--config") => match args.get(2) {
            Some(path) => (Some(path.as_str()), &args[3..]),
            None => usage(bin),
        },
        Some("-h" | "--help") | None => usage(bin),
        Some(_) => (None, &args[1..]),
    };

    let Some((level, words)) = rest.split_first() else {
        usage(bin);
    };

    let level: LogLevel = match level.parse() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[logline] {e}");
            usage(bin);
        }
    };

    // --- Load config -------------------------------------------------------
    let config = match config_path {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("[logline] {e}");
            process::exit(1);
        }),
        None => match Config::load(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Config::empty()
            }
            Err(e) => {
                eprintln!("[logline] {e}");
                process::exit(1);
            }
        },
    };

    let sink = config.open_output().unwrap_or_else(|e| {
        eprintln!("[logline] {e}");
        process::exit(1);
    });

    // --- Emit --------------------------------------------------------------
    let mut logger = DefaultLogger::new(sink, config.log_prefix());
    let words: Vec<&dyn Display> = words.iter().map(|w| w as &dyn Display).collect();

    if let Err(e) = logger.log(level, &words) {
        eprintln!("[logline] {e}");
        process::exit(1);
    }

    if let Err(e) = logger.into_sink().flush() {
        eprintln!("[logline] flush failed: {e}");
        process::exit(1);
    }
}
