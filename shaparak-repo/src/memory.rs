//! In-memory configuration source.

use std::sync::RwLock;

use dashmap::DashMap;
use shaparak_types::{ConfigSource, Configuration, DriverName, Mode};

/// Driver configurations held in memory.
///
/// Entries can be replaced while dispatchers read them; every lookup
/// returns a snapshot clone.
#[derive(Debug, Default)]
pub struct InMemoryConfigSource {
    drivers: DashMap<DriverName, Configuration>,
    default_mode: RwLock<Option<Mode>>,
}

impl InMemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores configuration for `driver`, returning the previous entry.
    pub fn insert(&self, driver: DriverName, config: Configuration) -> Option<Configuration> {
        self.drivers.insert(driver, config)
    }

    pub fn remove(&self, driver: &DriverName) -> Option<Configuration> {
        self.drivers.remove(driver).map(|(_, config)| config)
    }

    pub fn set_default_mode(&self, mode: Option<Mode>) {
        let mut guard = self
            .default_mode
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = mode;
    }

    /// Drivers with persisted configuration, sorted.
    pub fn drivers(&self) -> Vec<DriverName> {
        let mut names: Vec<_> = self.drivers.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn driver_config(&self, driver: &DriverName) -> Option<Configuration> {
        self.drivers.get(driver).map(|entry| entry.value().clone())
    }

    fn default_mode(&self) -> Option<Mode> {
        *self
            .default_mode
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> DriverName {
        DriverName::parse(s).unwrap()
    }

    #[test]
    fn test_lookup_is_per_driver() {
        let source = InMemoryConfigSource::new();
        source.insert(name("saman"), Configuration::new().with("merchantId", "A"));
        source.insert(name("mellat"), Configuration::new().with("terminalId", "1"));

        let saman = source.driver_config(&name("saman")).unwrap();
        source.insert(name("mellat"), Configuration::new().with("terminalId", "2"));

        assert_eq!(source.driver_config(&name("saman")).unwrap(), saman);
        assert_eq!(source.drivers(), vec![name("mellat"), name("saman")]);
        assert!(source.driver_config(&name("melli")).is_none());
    }

    #[test]
    fn test_remove_and_replace() {
        let source = InMemoryConfigSource::new();
        assert!(source.is_empty());
        assert!(source
            .insert(name("saman"), Configuration::new().with("merchantId", "A"))
            .is_none());
        assert!(source
            .insert(name("saman"), Configuration::new().with("merchantId", "B"))
            .is_some());
        assert_eq!(source.len(), 1);

        let removed = source.remove(&name("saman")).unwrap();
        assert_eq!(removed.get_str("merchantId"), Some("B"));
        assert!(source.is_empty());
    }

    #[test]
    fn test_default_mode() {
        let source = InMemoryConfigSource::new();
        assert_eq!(source.default_mode(), None);
        source.set_default_mode(Some(Mode::Sandbox));
        assert_eq!(source.default_mode(), Some(Mode::Sandbox));
    }
}
