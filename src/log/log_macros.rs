//! Formatting macros for [`LevelLogger`](crate::log::LevelLogger).
//!
//! They only wrap `format_args!` around the method calls, so the recorded call
//! site is the macro invocation. There is no compile-time level gating: every
//! level is always emitted.

#[macro_export]
macro_rules! logger_printf {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {
        $logger.printf($lvl, format_args!($($arg)*))
    };
}

/// `logger_print!(logger, level, a, b, c)` writes the values as one line,
/// spaced the same way as [`LevelLogger::print`](crate::log::LevelLogger::print).
#[macro_export]
macro_rules! logger_print {
    ($logger:expr, $lvl:expr $(, $val:expr)* $(,)?) => {
        $logger.print($lvl, &[$(&$val as &dyn $crate::log::PrintOperand),*])
    };
}

#[macro_export]
macro_rules! logger_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! logger_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(format_args!($($arg)*))
    };
}

/// Fatal: writes an `Error:` line and exits the process with status 1.
/// Code after this macro never runs.
#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}
