//! Dispatch facade.
//!
//! [`ShaparakManager`] is the long-lived, shareable handle: it owns the
//! registry, the persisted configuration source and the logger, all
//! immutable. Call-scoped state (the transaction being dispatched and any
//! runtime configuration override) lives in a [`Dispatcher`], created fresh
//! for each request.

use std::fmt;
use std::sync::Arc;

use shaparak_types::{
    ConfigSource, Configuration, DispatchError, DispatchLogger, DriverName, LogLevel, Provider,
    ProviderConstructor, Transaction,
};

use crate::factory::{self, ProviderFactory};
use crate::logging::TracingLogger;
use crate::registry::DriverRegistry;
use crate::resolver::ConfigResolver;

/// Entry point for dispatching transactions to bank drivers.
///
/// Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct ShaparakManager {
    registry: Arc<DriverRegistry>,
    source: Arc<dyn ConfigSource>,
    logger: Arc<dyn DispatchLogger>,
}

impl ShaparakManager {
    /// Creates a manager logging through `tracing`.
    pub fn new(registry: DriverRegistry, source: Arc<dyn ConfigSource>) -> Self {
        Self {
            registry: Arc::new(registry),
            source,
            logger: Arc::new(TracingLogger),
        }
    }

    /// Replaces the log sink.
    pub fn with_logger(mut self, logger: Arc<dyn DispatchLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    pub fn config_source(&self) -> &Arc<dyn ConfigSource> {
        &self.source
    }

    /// Fresh call-scoped dispatcher with no override and no transaction.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            registry: Arc::clone(&self.registry),
            logger: Arc::clone(&self.logger),
            resolver: ConfigResolver::new(Arc::clone(&self.source)),
            transaction: None,
        }
    }

    /// Builds the provider for `driver`, bound to `transaction`.
    ///
    /// Each call uses its own [`Dispatcher`], so an override passed here
    /// never affects another call.
    pub fn with(
        &self,
        driver: &str,
        transaction: Arc<dyn Transaction>,
        config: Configuration,
    ) -> Result<Box<dyn Provider>, DispatchError> {
        self.dispatcher().with(driver, transaction, config)
    }

    /// Builds a provider from a constructor and a configuration the caller
    /// already resolved. Only the global default mode is read from the
    /// persisted source.
    pub fn build(
        &self,
        constructor: &ProviderConstructor,
        transaction: Arc<dyn Transaction>,
        config: Configuration,
    ) -> Result<Box<dyn Provider>, DispatchError> {
        factory::build(constructor, transaction, config, self.source.default_mode())
    }
}

impl fmt::Debug for ShaparakManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaparakManager")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Whether a dispatcher carries a runtime configuration override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideState {
    NoOverride,
    OverrideActive,
}

/// Call-scoped dispatch state for one request.
///
/// Once an override is set it applies to every driver resolved through this
/// dispatcher, whatever its name, until a new non-empty override replaces
/// it. Do not share one dispatcher between requests.
pub struct Dispatcher {
    registry: Arc<DriverRegistry>,
    logger: Arc<dyn DispatchLogger>,
    resolver: ConfigResolver,
    transaction: Option<Arc<dyn Transaction>>,
}

impl Dispatcher {
    /// Stores `transaction` (and `config`, when non-empty, as the runtime
    /// override) then builds the provider registered as `driver`.
    pub fn with(
        &mut self,
        driver: &str,
        transaction: Arc<dyn Transaction>,
        config: Configuration,
    ) -> Result<Box<dyn Provider>, DispatchError> {
        self.transaction = Some(Arc::clone(&transaction));

        if self.resolver.set_runtime(config) {
            self.logger.log(
                LogLevel::Debug,
                "runtime configuration override applied",
                &[("driver", driver.to_string())],
            );
        }

        let order_id = transaction.order_id().to_string();
        let result = DriverName::parse(driver).and_then(|name| {
            ProviderFactory::new(&self.registry, &self.resolver).build(&name, transaction)
        });

        match &result {
            Ok(provider) => self.logger.log(
                LogLevel::Info,
                "provider built",
                &[
                    ("driver", provider.name().to_string()),
                    ("mode", provider.mode().to_string()),
                    ("order_id", order_id),
                ],
            ),
            Err(e) => self.logger.log(
                LogLevel::Warn,
                "dispatch failed",
                &[
                    ("driver", driver.to_string()),
                    ("order_id", order_id),
                    ("error", e.to_string()),
                ],
            ),
        }

        result
    }

    /// Effective configuration for `driver` on this dispatcher.
    pub fn resolve_config(&self, driver: &str) -> Result<Configuration, DispatchError> {
        let name = DriverName::parse(driver)?;
        self.resolver.resolve(&name)
    }

    pub fn state(&self) -> OverrideState {
        if self.resolver.runtime().is_some() {
            OverrideState::OverrideActive
        } else {
            OverrideState::NoOverride
        }
    }

    /// Transaction stored by the last call to [`Dispatcher::with`].
    pub fn transaction(&self) -> Option<&Arc<dyn Transaction>> {
        self.transaction.as_ref()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("state", &self.state())
            .field("transaction", &self.transaction)
            .finish_non_exhaustive()
    }
}
