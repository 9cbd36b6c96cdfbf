//! # Shaparak Hex
//!
//! Driver resolution and transaction dispatch for Shaparak gateways.
//!
//! ## Architecture
//!
//! - `registry` - Explicit driver name → constructor map
//! - `resolver` - Runtime override before persisted configuration
//! - `factory` - Mode/HTTP option extraction and provider construction
//! - `manager` - Dispatch facade (`ShaparakManager`) and per-request `Dispatcher`
//! - `logging` - `tracing`-backed implementation of the logging port
//!
//! The manager is generic over nothing: bank adapters, configuration stores
//! and log sinks are all injected as trait objects.

pub mod factory;
pub mod logging;
pub mod manager;
pub mod registry;
pub mod resolver;


pub use factory::ProviderFactory;
pub use logging::TracingLogger;
pub use manager::{Dispatcher, OverrideState, ShaparakManager};
pub use registry::DriverRegistry;
pub use resolver::ConfigResolver;
