//! `tracing`-backed dispatch logger.

use shaparak_types::{DispatchLogger, LogLevel};

/// Prefix stamped on every dispatch log message.
pub const LOG_PREFIX: &str = "shaparak:";

/// Forwards dispatch events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DispatchLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, String)]) {
        let fields = fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ");

        match level {
            LogLevel::Debug => tracing::debug!(%fields, "{} {}", LOG_PREFIX, message),
            LogLevel::Info => tracing::info!(%fields, "{} {}", LOG_PREFIX, message),
            LogLevel::Warn => tracing::warn!(%fields, "{} {}", LOG_PREFIX, message),
            LogLevel::Error => tracing::error!(%fields, "{} {}", LOG_PREFIX, message),
        }
    }
}
