//! # Shaparak Types
//!
//! Domain types and port traits for dispatching payment transactions to
//! Shaparak bank drivers. This crate has ZERO IO dependencies - only value
//! types, the contracts every bank adapter satisfies, and the error taxonomy.
//!
//! ## Architecture
//!
//! - `domain/` - Value types (Money, PaymentTransaction, Configuration, Mode, DriverName)
//! - `ports/` - Trait definitions for transactions, providers, config sources and logging
//! - `error/` - Domain, dispatch and config-source error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Configuration, Currency, DriverName, HttpClientOptions, Mode, Money, PaymentTransaction,
    TransactionId,
};
pub use error::{DispatchError, DomainError, SourceError};
pub use ports::{
    ConfigSource, DispatchLogger, LogLevel, NoopLogger, Provider, ProviderConstructor,
    Transaction,
};
