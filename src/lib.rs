//! levellog is a small leveled logger.
//!
//! A [`LevelLogger`](log::LevelLogger) owns one sink (any `io::Write`) and
//! writes timestamped lines tagged with the call site and a severity prefix:
//!
//! ```text
//! 2024/03/09 07:05:01 main.rs:12: Warning:disk almost full
//! ```
//!
//! The sink can be swapped at runtime or pointed at a file that is created on
//! demand and always appended to. Logging at the `Error` severity through
//! [`LevelLogger::error`](log::LevelLogger::error) is fatal: the process exits
//! with status 1 right after the line is written.

/// Loads the INI-style configuration the logger can be built from.
pub mod config;
/// Leveled logger, severity levels and formatting macros.
pub mod log;

pub use log::{LevelLogger, LogLevel};
