//! Optional process-wide logger.
//!
//! Installed once at startup and immutable afterwards. Code that can take a
//! `&LevelLogger` should prefer that over reaching for the global.

use std::sync::OnceLock;

use crate::log::LevelLogger;

static GLOBAL: OnceLock<LevelLogger> = OnceLock::new();

/// Installs the process-wide logger.
///
/// # Errors
///
/// If a logger is already installed, `logger` is handed back untouched.
pub fn init_global(logger: LevelLogger) -> Result<(), LevelLogger> {
    GLOBAL.set(logger)
}

/// The process-wide logger, if [`init_global`] has run.
#[must_use]
pub fn global() -> Option<&'static LevelLogger> {
    GLOBAL.get()
}
