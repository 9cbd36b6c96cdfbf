//! Configuration resolution.
//!
//! A runtime override, once set, is returned verbatim for every driver
//! resolved afterwards. Without one, configuration comes from the persisted
//! source under `shaparak.<driver>`. The two are never merged.

use std::sync::Arc;

use shaparak_types::{ConfigSource, Configuration, DispatchError, DriverName, Mode};

/// Resolves the effective configuration for a driver.
#[derive(Clone)]
pub struct ConfigResolver {
    source: Arc<dyn ConfigSource>,
    runtime: Option<Configuration>,
}

impl ConfigResolver {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            source,
            runtime: None,
        }
    }

    /// Installs a runtime override. Empty configurations are ignored so an
    /// active override is never cleared; returns whether it was applied.
    pub fn set_runtime(&mut self, config: Configuration) -> bool {
        if config.is_empty() {
            return false;
        }
        self.runtime = Some(config);
        true
    }

    pub fn runtime(&self) -> Option<&Configuration> {
        self.runtime.as_ref()
    }

    /// Effective configuration for `driver`.
    pub fn resolve(&self, driver: &DriverName) -> Result<Configuration, DispatchError> {
        if let Some(runtime) = &self.runtime {
            return Ok(runtime.clone());
        }

        self.source
            .driver_config(driver)
            .ok_or_else(|| DispatchError::ConfigurationNotFound {
                driver: driver.clone(),
                key: driver.config_key(),
            })
    }

    /// Global default mode from the persisted source.
    pub fn default_mode(&self) -> Option<Mode> {
        self.source.default_mode()
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("runtime_override", &self.runtime.is_some())
            .finish()
    }
}
