//! State shared by every bank adapter.

use std::sync::Arc;

use shaparak_types::{Configuration, HttpClientOptions, Mode, Transaction};

/// Configuration key that overrides the gateway endpoint in every mode.
pub const GATEWAY_URL_KEY: &str = "gatewayUrl";

/// Configuration key holding the endpoint used in sandbox mode.
pub const SANDBOX_URL_KEY: &str = "sandboxUrl";

/// The four constructor arguments, held by each adapter.
#[derive(Debug, Clone)]
pub struct BankContext {
    pub transaction: Arc<dyn Transaction>,
    pub config: Configuration,
    pub mode: Mode,
    pub http_client_options: HttpClientOptions,
}

impl BankContext {
    pub fn new(
        transaction: Arc<dyn Transaction>,
        config: Configuration,
        mode: Mode,
        http_client_options: HttpClientOptions,
    ) -> Self {
        Self {
            transaction,
            config,
            mode,
            http_client_options,
        }
    }

    /// Picks the redirect endpoint: `gatewayUrl`, then `sandboxUrl` when in
    /// sandbox mode, then the bank's production endpoint.
    pub fn gateway_url(&self, production_url: &str) -> String {
        if let Some(url) = self.config.get_str(GATEWAY_URL_KEY) {
            return url.to_string();
        }
        if self.mode.is_sandbox() {
            if let Some(url) = self.config.get_str(SANDBOX_URL_KEY) {
                return url.to_string();
            }
        }
        production_url.to_string()
    }

    /// Builds an HTTP client from the adapter's options. No request is sent.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let opts = &self.http_client_options;
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = opts.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = opts.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(proxy) = opts.proxy() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        if opts.verify() == Some(false) {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(agent) = opts.user_agent() {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}
