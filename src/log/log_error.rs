use std::{fmt, io, path::PathBuf};

/// Failures while setting a logger up from configuration.
///
/// [`LevelLogger::set_file_sink`](super::LevelLogger::set_file_sink) returns the
/// raw `io::Error`; this type adds the path that was involved.
#[derive(Debug)]
pub enum LogError {
    ConfigRead { path: PathBuf, source: io::Error },
    Sink { path: PathBuf, source: io::Error },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LogError::*;
        match self {
            ConfigRead { path, source } => {
                write!(f, "Error reading config file {}: {source}", path.display())
            }
            Sink { path, source } => {
                write!(f, "Failed to open log file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::ConfigRead { source, .. } | LogError::Sink { source, .. } => Some(source),
        }
    }
}
