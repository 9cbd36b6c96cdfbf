//! Bank adapters for Shaparak gateways.
//!
//! Every adapter implements [`Provider`] and is built from the same four
//! arguments: `(transaction, config, mode, http_client_options)`. Adapters
//! are declared with a macro that generates the provider struct, its
//! constructor and a [`Bank`] variant used for enumeration.
//!
//! # Adding a New Bank
//! Add a line to the `define_banks!` invocation:
//! ```ignore
//! define_banks! {
//!     // ... existing banks ...
//!     Sepah(SepahProvider) => ("sepah", "Bank Sepah", "https://sepah.shaparak.ir/pay"),
//! }
//! ```
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use shaparak_banks::Bank;
//! use shaparak_types::{
//!     Configuration, HttpClientOptions, Mode, Money, PaymentTransaction, Transaction,
//! };
//!
//! let tx: Arc<dyn Transaction> =
//!     Arc::new(PaymentTransaction::new("order-1", Money::rials(10_000).unwrap()));
//! let build = Bank::Saman.constructor();
//! let provider = build(tx, Configuration::new(), Mode::Production, HttpClientOptions::default());
//! assert_eq!(provider.name(), "saman");
//! ```

use std::sync::Arc;

use shaparak_types::{
    Configuration, DispatchError, DriverName, HttpClientOptions, Mode, Provider,
    ProviderConstructor, Transaction,
};

mod context;

pub use context::{BankContext, GATEWAY_URL_KEY, SANDBOX_URL_KEY};

/// Wraps a concrete adapter constructor into a [`ProviderConstructor`].
pub fn constructor_for<P, F>(build: F) -> ProviderConstructor
where
    P: Provider + 'static,
    F: Fn(Arc<dyn Transaction>, Configuration, Mode, HttpClientOptions) -> P
        + Send
        + Sync
        + 'static,
{
    Arc::new(move |transaction, config, mode, http_client_options| {
        Box::new(build(transaction, config, mode, http_client_options)) as Box<dyn Provider>
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapter generation
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! define_banks {
    (
        $(
            $variant:ident($provider:ident) => ($driver:literal, $title:literal, $url:literal)
        ),* $(,)?
    ) => {
        $(
            #[doc = concat!($title, " gateway adapter.")]
            #[derive(Debug, Clone)]
            pub struct $provider {
                ctx: BankContext,
            }

            impl $provider {
                pub const DRIVER: &'static str = $driver;
                pub const PRODUCTION_URL: &'static str = $url;

                pub fn new(
                    transaction: Arc<dyn Transaction>,
                    config: Configuration,
                    mode: Mode,
                    http_client_options: HttpClientOptions,
                ) -> Self {
                    Self {
                        ctx: BankContext::new(transaction, config, mode, http_client_options),
                    }
                }

                /// HTTP client configured from `httpClientOptions`.
                pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
                    self.ctx.http_client()
                }
            }

            impl Provider for $provider {
                fn name(&self) -> &str {
                    $driver
                }

                fn transaction(&self) -> &Arc<dyn Transaction> {
                    &self.ctx.transaction
                }

                fn config(&self) -> &Configuration {
                    &self.ctx.config
                }

                fn mode(&self) -> Mode {
                    self.ctx.mode
                }

                fn http_client_options(&self) -> &HttpClientOptions {
                    &self.ctx.http_client_options
                }

                fn gateway_url(&self) -> String {
                    self.ctx.gateway_url($url)
                }
            }
        )*

        /// Every bank with a built-in adapter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Bank {
            $($variant),*
        }

        impl Bank {
            /// Driver name the adapter registers under.
            pub fn driver(&self) -> &'static str {
                match self {
                    $(Bank::$variant => $driver),*
                }
            }

            pub fn title(&self) -> &'static str {
                match self {
                    $(Bank::$variant => $title),*
                }
            }

            pub fn production_url(&self) -> &'static str {
                match self {
                    $(Bank::$variant => $url),*
                }
            }

            pub fn constructor(&self) -> ProviderConstructor {
                match self {
                    $(Bank::$variant => constructor_for($provider::new)),*
                }
            }

            pub fn all() -> &'static [Bank] {
                &[$(Bank::$variant),*]
            }
        }

        impl std::str::FromStr for Bank {
            type Err = DispatchError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let name = DriverName::parse(s)?;
                match name.as_str() {
                    $($driver => Ok(Bank::$variant),)*
                    _ => Err(DispatchError::UnknownDriver(name)),
                }
            }
        }

        impl std::fmt::Display for Bank {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.driver())
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// BANK DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_banks! {
    Saman(SamanProvider) => ("saman", "Saman Bank (SEP)", "https://sep.shaparak.ir/OnlinePG/OnlinePG"),
    Mellat(MellatProvider) => ("mellat", "Bank Mellat (Behpardakht)", "https://bpm.shaparak.ir/pgwchannel/startpay.mellat"),
    Parsian(ParsianProvider) => ("parsian", "Parsian Bank (PEC)", "https://pec.shaparak.ir/NewIPG/"),
    Pasargad(PasargadProvider) => ("pasargad", "Bank Pasargad (PEP)", "https://pep.shaparak.ir/payment.aspx"),
    Melli(MelliProvider) => ("melli", "Bank Melli (Sadad)", "https://sadad.shaparak.ir/VPG/Purchase"),
    Saderat(SaderatProvider) => ("saderat", "Bank Saderat (Sepehr)", "https://sepehr.shaparak.ir:8080/Pay"),
    AsanPardakht(AsanPardakhtProvider) => ("asanpardakht", "Asan Pardakht", "https://asan.shaparak.ir/"),
}

/// Driver name and constructor for every built-in bank.
pub fn constructors() -> Vec<(&'static str, ProviderConstructor)> {
    Bank::all()
        .iter()
        .map(|bank| (bank.driver(), bank.constructor()))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
