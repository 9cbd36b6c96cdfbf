//! Driver names.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DispatchError;

/// Prefix of the persisted-configuration key space.
pub const CONFIG_NAMESPACE: &str = "shaparak";

/// Normalised name of a bank driver (e.g. `saman`).
///
/// Names are trimmed and lower-cased so `"Saman"` and `"saman"` address the
/// same driver. A name is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DriverName(String);

impl DriverName {
    /// Parses a driver name, failing with `NoDriverSpecified` when blank.
    pub fn parse(name: &str) -> Result<Self, DispatchError> {
        let normalised = name.trim().to_ascii_lowercase();
        if normalised.is_empty() {
            return Err(DispatchError::NoDriverSpecified);
        }
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which this driver's persisted configuration lives.
    pub fn config_key(&self) -> String {
        format!("{}.{}", CONFIG_NAMESPACE, self.0)
    }
}

impl fmt::Display for DriverName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DriverName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DriverName {
    type Error = DispatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DriverName> for String {
    fn from(value: DriverName) -> Self {
        value.0
    }
}

impl std::str::FromStr for DriverName {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_normalised() {
        let name = DriverName::parse("  Saman ").unwrap();
        assert_eq!(name.as_str(), "saman");
        assert_eq!(name, DriverName::parse("SAMAN").unwrap());
    }

    #[test]
    fn test_blank_name_is_no_driver() {
        assert_eq!(DriverName::parse(""), Err(DispatchError::NoDriverSpecified));
        assert_eq!(DriverName::parse("   "), Err(DispatchError::NoDriverSpecified));
    }

    #[test]
    fn test_config_key() {
        let name = DriverName::parse("mellat").unwrap();
        assert_eq!(name.config_key(), "shaparak.mellat");
    }
}
