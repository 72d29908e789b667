use std::fmt;

/// Prefix used for numeric levels outside the known range.
pub const FALLBACK_PREFIX: &str = "yc-snowflake";

/// Defines the severity levels for log messages.
///
/// The level only selects the prefix of an emitted line; nothing is filtered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Fine-grained events that are mostly useful while debugging.
    Debug,
    /// Progress of the application at a coarse-grained level.
    Info,
    /// Potentially harmful situations.
    Warning,
    /// Error events. Only [`LevelLogger::error`](super::LevelLogger::error) is fatal.
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Numeric code accepted by the generic entry points.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warning => 2,
            LogLevel::Error => 3,
        }
    }

    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|lvl| lvl.code() == code)
    }

    /// Text written right before the message.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug:",
            LogLevel::Info => "Info:",
            LogLevel::Warning => "Warning:",
            LogLevel::Error => "Error:",
        }
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.code()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Resolves the prefix for any numeric level, known or not.
#[must_use]
pub fn prefix_for_code(code: i32) -> &'static str {
    LogLevel::from_code(code).map_or(FALLBACK_PREFIX, LogLevel::prefix)
}
