//! Domain models for driver dispatch.

pub mod configuration;
pub mod driver;
pub mod mode;
pub mod money;
pub mod transaction;

pub use configuration::{Configuration, HttpClientOptions};
pub use driver::DriverName;
pub use mode::Mode;
pub use money::{Currency, Money};
pub use transaction::{PaymentTransaction, TransactionId};
