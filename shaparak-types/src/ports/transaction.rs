//! Transaction port.

use std::fmt::Debug;

use crate::domain::Money;

/// The payment being processed, as seen by a bank adapter.
///
/// The dispatch layer only passes an `Arc<dyn Transaction>` through to the
/// provider it builds; it never reads or mutates the transaction.
pub trait Transaction: Debug + Send + Sync {
    /// Order identifier sent to the gateway.
    fn order_id(&self) -> &str;

    /// Amount to be paid.
    fn amount(&self) -> Money;

    /// Where the gateway sends the payer back to.
    fn callback_url(&self) -> Option<&str>;

    /// Bank reference number, once known.
    fn reference(&self) -> Option<&str>;

    /// Provider-specific metadata slot.
    fn metadata(&self, key: &str) -> Option<&str>;
}
