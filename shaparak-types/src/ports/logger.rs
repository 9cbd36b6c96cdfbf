//! Logging port.

use std::fmt;

/// Severity of a dispatch log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Injected log sink used by the dispatch facade.
///
/// Logging is fire-and-forget: implementations must not fail or panic.
pub trait DispatchLogger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, String)]);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl DispatchLogger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str, _fields: &[(&str, String)]) {}
}
