//! Payment transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::money::Money;
use crate::ports::Transaction;

/// Unique identifier for a PaymentTransaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One payment attempt, as created by the host application.
///
/// The dispatch layer never reads these fields; bank adapters do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTransaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Order identifier sent to the gateway (unique per merchant)
    pub order_id: String,
    /// Amount to be paid
    pub amount: Money,
    /// Where the gateway redirects the payer after payment
    pub callback_url: Option<String>,
    /// Bank reference number, known after the payer returns
    pub reference: Option<String>,
    /// Provider-specific slots (tokens, tracking codes, card hashes)
    pub metadata: BTreeMap<String, String>,
    /// When the transaction was created
    pub created_at: DateTime<Utc>,
}

impl PaymentTransaction {
    /// Creates a new transaction for the given order.
    pub fn new(order_id: impl Into<String>, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            order_id: order_id.into(),
            amount,
            callback_url: None,
            reference: None,
            metadata: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl Transaction for PaymentTransaction {
    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    #[test]
    fn test_transaction_creation() {
        let amount = Money::new(15_000, Currency::IRT).unwrap();
        let tx = PaymentTransaction::new("order-1", amount)
            .with_callback_url("https://shop.example/callback")
            .with_metadata("token", "abc");

        assert_eq!(Transaction::order_id(&tx), "order-1");
        assert_eq!(Transaction::amount(&tx).to_rials(), 150_000);
        assert_eq!(
            Transaction::callback_url(&tx),
            Some("https://shop.example/callback")
        );
        assert_eq!(Transaction::metadata(&tx, "token"), Some("abc"));
        assert_eq!(Transaction::metadata(&tx, "missing"), None);
        assert!(Transaction::reference(&tx).is_none());
    }

    #[test]
    fn test_transaction_ids_are_unique() {
        let amount = Money::rials(1000).unwrap();
        let a = PaymentTransaction::new("a", amount);
        let b = PaymentTransaction::new("b", amount);
        assert_ne!(a.id, b.id);
    }
}
