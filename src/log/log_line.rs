use chrono::{DateTime, Local};
use std::{panic::Location, path::Path};

/// `2006/01/02 15:04:05` style header timestamp.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A single log entry, ready to be rendered to a sink.
///
/// Carries the wall-clock time of the call, the call site (short file name and
/// line), the severity prefix and the already formatted message.
#[derive(Debug, Clone)]
pub struct LogLine {
    /// Local time at which the entry was created.
    pub time: DateTime<Local>,
    /// Final path component of the calling source file.
    pub file: &'static str,
    /// Line number of the call site.
    pub line: u32,
    /// Severity prefix, written immediately before the message.
    pub prefix: &'static str,
    /// The message content.
    pub text: String,
}

impl LogLine {
    /// Creates a `LogLine` stamped with the current local time.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let line = LogLine::new("Info:", "ready", Location::caller());
    /// assert!(line.render().ends_with("Info:ready\n"));
    /// ```
    pub fn new(
        prefix: &'static str,
        text: impl Into<String>,
        site: &'static Location<'static>,
    ) -> Self {
        Self {
            time: Local::now(),
            file: short_file(site.file()),
            line: site.line(),
            prefix,
            text: text.into(),
        }
    }

    /// Renders `<date> <time> <file>:<line>: <prefix><message>` plus a newline
    /// if the message does not already end with one.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} {}:{}: {}{}",
            self.time.format(TIMESTAMP_FORMAT),
            self.file,
            self.line,
            self.prefix,
            self.text
        );
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

fn short_file(path: &'static str) -> &'static str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
