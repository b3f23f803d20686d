//! Leveled logging into the engine's client log.
//!
//! Every call is fire-and-forget. Messages are formatted on the script side
//! and copied across the boundary.
//!
//! ```ignore
//! debug::log_warning(format_args!("{} is low on health", entity.name()));
//! ```

use std::fmt::Display;

use eve_interop::LogLevel;

use crate::interop::with_native;

/// Emit `message` at `level`.
pub fn log_at(level: LogLevel, message: impl Display) {
    let message = message.to_string();
    with_native(|n| n.debug_log(level, &message));
}

/// Emit a trace-level message.
pub fn log(message: impl Display) {
    log_at(LogLevel::Trace, message);
}

pub fn log_info(message: impl Display) {
    log_at(LogLevel::Info, message);
}

pub fn log_warning(message: impl Display) {
    log_at(LogLevel::Warning, message);
}

pub fn log_error(message: impl Display) {
    log_at(LogLevel::Error, message);
}

pub fn log_fatal(message: impl Display) {
    log_at(LogLevel::Fatal, message);
}
