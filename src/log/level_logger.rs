use crate::{
    config::Config,
    log::{
        log_error::LogError,
        log_level::{LogLevel, prefix_for_code},
        log_line::LogLine,
        print_operand::{PrintOperand, join_operands},
    },
};

use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write},
    mem,
    panic::Location,
    path::Path,
    process,
    sync::{Mutex, PoisonError},
};

/// Exit status used by [`LevelLogger::error`].
pub const FATAL_EXIT_CODE: i32 = 1;

type BoxedSink = Box<dyn Write + Send>;

/// Leveled logger writing timestamped, prefixed lines to a single sink.
///
/// Every emitted line has the form
/// `YYYY/MM/DD HH:MM:SS file.rs:LINE: <prefix><message>`, where the call site is
/// the caller of the logging method. Each call renders its line first and then
/// performs one write under the sink lock, so concurrent callers never interleave
/// partial lines.
///
/// Replacing the sink needs `&mut self`, so it cannot race with in-flight writes.
/// The logger never flushes or closes a replaced sink: [`set_sink`](Self::set_sink)
/// hands it back to the caller and [`set_file_sink`](Self::set_file_sink) leaks it.
pub struct LevelLogger {
    sink: Mutex<BoxedSink>,
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger").finish_non_exhaustive()
    }
}

impl LevelLogger {
    /// Creates a logger writing to `sink`. No validation is performed.
    #[must_use]
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Logger writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Builds a logger from the `[Logging] log_file` setting.
    ///
    /// Without a configured file the logger writes to standard error.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Sink`] if the configured file cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let mut logger = Self::stderr();
        if let Some(path) = config.log_file() {
            logger
                .set_file_sink(&path)
                .map_err(|source| LogError::Sink { path, source })?;
        }
        Ok(logger)
    }

    /// Installs a new sink unconditionally and hands back the previous one.
    pub fn set_sink<W: Write + Send + 'static>(&mut self, sink: W) -> Box<dyn Write + Send> {
        let current = self.sink.get_mut().unwrap_or_else(PoisonError::into_inner);
        mem::replace(current, Box::new(sink))
    }

    /// Opens `path` for appending, creating it if missing, and installs it as
    /// the sink. An empty path is a no-op.
    ///
    /// Existing content is never truncated.
    ///
    /// Known limitation: the sink being replaced is neither flushed nor
    /// closed. It is deliberately leaked, so calling this repeatedly keeps every
    /// previously opened file handle alive until the process exits.
    ///
    /// # Errors
    ///
    /// Returns the `io::Error` from opening the file unchanged; the current
    /// sink stays in place.
    pub fn set_file_sink<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        mem::forget(self.set_sink(file));
        Ok(())
    }

    /// Formats `args` and writes one line with the prefix for `level`.
    ///
    /// Numeric codes outside the known levels use the fallback prefix. This
    /// never terminates the process, even for [`LogLevel::Error`].
    #[track_caller]
    pub fn printf(&self, level: impl Into<i32>, args: fmt::Arguments<'_>) {
        self.emit(
            prefix_for_code(level.into()),
            args.to_string(),
            Location::caller(),
        );
    }

    /// Writes `values` as one line. A space separates two neighbouring values
    /// only when neither of them is a string.
    #[track_caller]
    pub fn print(&self, level: impl Into<i32>, values: &[&dyn PrintOperand]) {
        self.emit(
            prefix_for_code(level.into()),
            join_operands(values),
            Location::caller(),
        );
    }

    /// Formats `args` and writes one `Debug:` line.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit_level(LogLevel::Debug, args, Location::caller());
    }

    /// Formats `args` and writes one `Info:` line.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit_level(LogLevel::Info, args, Location::caller());
    }

    /// Formats `args` and writes one `Warning:` line.
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.emit_level(LogLevel::Warning, args, Location::caller());
    }

    /// Writes an `Error:` line and terminates the process with exit status 1.
    ///
    /// Never returns: control flow does not continue past a call to this
    /// method. Whether the write itself succeeded is not checked.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_level(LogLevel::Error, args, Location::caller());
        process::exit(FATAL_EXIT_CODE)
    }

    fn emit_level(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        site: &'static Location<'static>,
    ) {
        self.emit(level.prefix(), args.to_string(), site);
    }

    fn emit(&self, prefix: &'static str, text: String, site: &'static Location<'static>) {
        let rendered = LogLine::new(prefix, text, site).render();
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        // Write failures are not reported anywhere.
        let _ = sink.write_all(rendered.as_bytes());
        let _ = sink.flush();
    }
}
