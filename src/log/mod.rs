pub mod default_logger;
pub mod log_error;
pub mod log_level;
pub mod log_line;
pub mod log_macros;
pub mod logger;
pub mod noop_logger;

pub use default_logger::DefaultLogger;
pub use log_error::LogError;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use noop_logger::NoopLogger;
