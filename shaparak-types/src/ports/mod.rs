//! Port traits (interfaces for adapters).
//!
//! These are the contracts bank adapters, configuration stores and log
//! sinks implement. The dispatch layer depends on these traits only.

mod config_source;
mod logger;
mod provider;
mod transaction;

pub use config_source::ConfigSource;
pub use logger::{DispatchLogger, LogLevel, NoopLogger};
pub use provider::{Provider, ProviderConstructor};
pub use transaction::Transaction;
