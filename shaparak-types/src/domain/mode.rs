//! Gateway operating mode.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Environment a provider talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sandbox,
    #[default]
    Production,
}

impl Mode {
    /// Applies the mode precedence: per-driver value, then the global
    /// default, then production.
    pub fn resolve(configured: Option<Mode>, global_default: Option<Mode>) -> Mode {
        configured.or(global_default).unwrap_or_default()
    }

    pub fn is_sandbox(&self) -> bool {
        matches!(self, Mode::Sandbox)
    }
}

impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        match self {
            Mode::Sandbox => "sandbox",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Mode::Sandbox),
            "production" => Ok(Mode::Production),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_mode_wins() {
        let mode = Mode::resolve(Some(Mode::Sandbox), Some(Mode::Production));
        assert_eq!(mode, Mode::Sandbox);
    }

    #[test]
    fn test_global_default_used_when_unconfigured() {
        assert_eq!(Mode::resolve(None, Some(Mode::Sandbox)), Mode::Sandbox);
    }

    #[test]
    fn test_falls_back_to_production() {
        assert_eq!(Mode::resolve(None, None), Mode::Production);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SandBox".parse::<Mode>().unwrap(), Mode::Sandbox);
        assert_eq!(" production ".parse::<Mode>().unwrap(), Mode::Production);
        assert!(matches!(
            "staging".parse::<Mode>(),
            Err(DomainError::InvalidMode(m)) if m == "staging"
        ));
    }
}
