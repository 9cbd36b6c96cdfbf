//! Type-safe monetary value with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Currencies accepted by Shaparak gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Iranian rial, the unit every gateway settles in.
    IRR,
    /// Toman, ten rials.
    IRT,
}

impl Currency {
    /// Returns how many rials one unit of this currency is worth.
    pub fn rials_per_unit(&self) -> i64 {
        match self {
            Currency::IRR => 1,
            Currency::IRT => 10,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::str::FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IRR" => Ok(Currency::IRR),
            "IRT" => Ok(Currency::IRT),
            other => Err(DomainError::UnsupportedCurrency(other.to_string())),
        }
    }
}

/// Non-negative amount in a given currency.
///
/// Neither currency has a minor unit in practice, so the amount is a whole
/// number of rials or tomans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { amount, currency })
    }

    /// Shorthand for an amount in rials.
    pub fn rials(amount: i64) -> Result<Self, DomainError> {
        Self::new(amount, Currency::IRR)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount converted to rials.
    pub fn to_rials(&self) -> i64 {
        self.amount.saturating_mul(self.currency.rials_per_unit())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
