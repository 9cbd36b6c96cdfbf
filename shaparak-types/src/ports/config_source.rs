//! Persisted configuration port.

use crate::domain::{Configuration, DriverName, Mode};

/// Durable configuration store addressed by driver name.
///
/// Implementations load their data up front, so lookups are infallible:
/// a missing entry is `None`, never an error.
pub trait ConfigSource: Send + Sync {
    /// Configuration persisted under `shaparak.<driver>`.
    fn driver_config(&self, driver: &DriverName) -> Option<Configuration>;

    /// Global default mode (`shaparak.mode`), if set.
    fn default_mode(&self) -> Option<Mode>;
}
