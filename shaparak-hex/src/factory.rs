//! Provider construction.
//!
//! Pure: no I/O and no logging. The facade in `manager` owns both.

use std::sync::Arc;

use shaparak_types::{
    Configuration, DispatchError, DriverName, Mode, Provider, ProviderConstructor, Transaction,
};

use crate::registry::DriverRegistry;
use crate::resolver::ConfigResolver;

/// Builds a provider from an already-resolved configuration.
///
/// The mode comes from the configuration's `mode` entry, then
/// `default_mode`, then production. HTTP client options come from
/// `httpClientOptions`, defaulting to an empty mapping.
pub fn build(
    constructor: &ProviderConstructor,
    transaction: Arc<dyn Transaction>,
    config: Configuration,
    default_mode: Option<Mode>,
) -> Result<Box<dyn Provider>, DispatchError> {
    let mode = Mode::resolve(config.mode()?, default_mode);
    let http_client_options = config.http_client_options()?;

    Ok(constructor(transaction, config, mode, http_client_options))
}

/// Builds providers by driver name.
#[derive(Debug, Clone, Copy)]
pub struct ProviderFactory<'a> {
    registry: &'a DriverRegistry,
    resolver: &'a ConfigResolver,
}

impl<'a> ProviderFactory<'a> {
    pub fn new(registry: &'a DriverRegistry, resolver: &'a ConfigResolver) -> Self {
        Self { registry, resolver }
    }

    /// Builds the provider registered as `driver`, bound to `transaction`.
    ///
    /// The registry is consulted before configuration, so an unregistered
    /// name is `UnknownDriver` even when no configuration exists for it.
    pub fn build(
        &self,
        driver: &DriverName,
        transaction: Arc<dyn Transaction>,
    ) -> Result<Box<dyn Provider>, DispatchError> {
        let constructor = self.registry.constructor(driver)?;
        let config = self.resolver.resolve(driver)?;

        build(constructor, transaction, config, self.resolver.default_mode())
    }
}
