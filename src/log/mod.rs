pub mod global;
pub mod level_logger;
pub mod log_error;
pub mod log_level;
pub mod log_line;
pub mod log_macros;
pub mod print_operand;
#[cfg(test)]
pub(crate) mod test_util;

pub use global::{global, init_global};
pub use level_logger::{FATAL_EXIT_CODE, LevelLogger};
pub use log_error::LogError;
pub use log_level::{FALLBACK_PREFIX, LogLevel, prefix_for_code};
pub use log_line::LogLine;
pub use print_operand::PrintOperand;
