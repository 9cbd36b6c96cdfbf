//! Error types for driver dispatch.

use crate::domain::DriverName;

/// Domain-level errors (invalid value types).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Invalid mode `{0}`: expected `sandbox` or `production`")]
    InvalidMode(String),
}

/// Errors surfaced by driver resolution and provider construction.
///
/// None of these are transient: they describe caller input or persisted
/// configuration that has to be corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("No Shaparak driver was specified")]
    NoDriverSpecified,

    #[error("Unknown Shaparak driver: {0}")]
    UnknownDriver(DriverName),

    #[error("Configuration not found for driver `{driver}` (expected `{key}`)")]
    ConfigurationNotFound { driver: DriverName, key: String },

    #[error("Invalid configuration value `{key}`: {reason}")]
    InvalidConfiguration { key: String, reason: String },
}

/// Errors raised while loading persisted configuration.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
