//! Driver registry.
//!
//! Maps normalised driver names to provider constructors. Populated at
//! startup; lookups never reflect on type names.

use std::collections::BTreeMap;
use std::fmt;

use shaparak_types::{DispatchError, DriverName, ProviderConstructor};

/// Enumerable set of registered drivers.
#[derive(Clone, Default)]
pub struct DriverRegistry {
    drivers: BTreeMap<DriverName, ProviderConstructor>,
}

impl DriverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in bank adapter.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (driver, constructor) in shaparak_banks::constructors() {
            if let Ok(name) = DriverName::parse(driver) {
                registry.drivers.insert(name, constructor);
            }
        }
        registry
    }

    /// Registers a constructor, returning the one it replaced.
    pub fn register(
        &mut self,
        name: &str,
        constructor: ProviderConstructor,
    ) -> Result<Option<ProviderConstructor>, DispatchError> {
        let name = DriverName::parse(name)?;
        Ok(self.drivers.insert(name, constructor))
    }

    /// Builder-style variant of [`DriverRegistry::register`].
    pub fn with_driver(
        mut self,
        name: &str,
        constructor: ProviderConstructor,
    ) -> Result<Self, DispatchError> {
        self.register(name, constructor)?;
        Ok(self)
    }

    pub fn contains(&self, name: &DriverName) -> bool {
        self.drivers.contains_key(name)
    }

    /// Registered driver names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &DriverName> {
        self.drivers.keys()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Looks up the constructor for `name`.
    pub fn constructor(&self, name: &DriverName) -> Result<&ProviderConstructor, DispatchError> {
        self.drivers
            .get(name)
            .ok_or_else(|| DispatchError::UnknownDriver(name.clone()))
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.drivers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaparak_banks::{SamanProvider, constructor_for};

    #[test]
    fn test_builtin_registers_every_bank() {
        let registry = DriverRegistry::builtin();
        let names: Vec<_> = registry.names().map(DriverName::as_str).collect();
        assert_eq!(
            names,
            vec!["asanpardakht", "melli", "mellat", "parsian", "pasargad", "saderat", "saman"]
        );
    }

    #[test]
    fn test_unknown_driver() {
        let registry = DriverRegistry::builtin();
        let name = DriverName::parse("unknownbank").unwrap();
        assert!(!registry.contains(&name));
        assert!(matches!(
            registry.constructor(&name),
            Err(DispatchError::UnknownDriver(n)) if n.as_str() == "unknownbank"
        ));
    }

    #[test]
    fn test_register_normalises_and_replaces() {
        let mut registry = DriverRegistry::new();
        assert!(registry.is_empty());

        let first = registry
            .register("Saman", constructor_for(SamanProvider::new))
            .unwrap();
        assert!(first.is_none());

        let second = registry
            .register("saman", constructor_for(SamanProvider::new))
            .unwrap();
        assert!(second.is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_alias_keeps_adapter_identity() {
        use shaparak_types::{Configuration, Money, PaymentTransaction, Provider, Transaction};
        use std::sync::Arc;

        let registry = DriverRegistry::new()
            .with_driver("sep", constructor_for(SamanProvider::new))
            .unwrap();
        let alias = DriverName::parse("sep").unwrap();
        let tx: Arc<dyn Transaction> =
            Arc::new(PaymentTransaction::new("order-1", Money::rials(1000).unwrap()));

        let provider = crate::factory::build(
            registry.constructor(&alias).unwrap(),
            tx,
            Configuration::new(),
            None,
        )
        .unwrap();

        assert!(registry.contains(&alias));
        assert_eq!(provider.name(), "saman");
    }

    #[test]
    fn test_register_requires_a_name() {
        let mut registry = DriverRegistry::new();
        let result = registry.register(" ", constructor_for(SamanProvider::new));
        assert!(matches!(result, Err(DispatchError::NoDriverSpecified)));
    }
}
