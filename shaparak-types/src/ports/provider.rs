//! Provider port.
//!
//! Every bank adapter implements [`Provider`] and is built through a
//! [`ProviderConstructor`] taking exactly
//! `(transaction, config, mode, http_client_options)`.

use std::fmt::Debug;
use std::sync::Arc;

use super::Transaction;
use crate::domain::{Configuration, HttpClientOptions, Mode};

/// A bank adapter bound to one transaction and one configuration.
///
/// Instances are built fresh for every dispatch and never pooled.
pub trait Provider: Debug + Send + Sync {
    /// The adapter's own driver identity (e.g. `saman`).
    ///
    /// This is fixed by the adapter, not by the registry: an adapter
    /// registered under an alias still reports its own name.
    fn name(&self) -> &str;

    /// The transaction this provider acts on.
    fn transaction(&self) -> &Arc<dyn Transaction>;

    /// Effective configuration the provider was built with.
    fn config(&self) -> &Configuration;

    fn mode(&self) -> Mode;

    fn http_client_options(&self) -> &HttpClientOptions;

    /// Endpoint the payer is redirected to for this provider's mode.
    fn gateway_url(&self) -> String;
}

/// Builds a provider from `(transaction, config, mode, http_client_options)`.
pub type ProviderConstructor = Arc<
    dyn Fn(Arc<dyn Transaction>, Configuration, Mode, HttpClientOptions) -> Box<dyn Provider>
        + Send
        + Sync,
>;
