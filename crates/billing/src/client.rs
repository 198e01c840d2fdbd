//! Stripe client wrapper and configuration

use stripe::Client;

use crate::error::{BillingError, BillingResult};

const DEFAULT_API_BASE: &str = "https://api.stripe.com";
const DEFAULT_APP_BASE_URL: &str = "http://localhost:5173";

/// Stripe configuration, normally loaded from the environment
#[derive(Clone, Debug)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... / sk_live_...)
    pub secret_key: String,
    /// Base URL of the web app, used for billing portal return URLs
    pub app_base_url: String,
    /// Stripe API base. Overridable so tests can point at a mock server.
    pub api_base: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// `STRIPE_SECRET_KEY` is required; `APP_URL` and `STRIPE_API_BASE`
    /// fall back to defaults.
    pub fn from_env() -> BillingResult<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| BillingError::Config("STRIPE_SECRET_KEY not set".to_string()))?;

        let app_base_url =
            std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_BASE_URL.to_string());

        let api_base =
            std::env::var("STRIPE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self {
            secret_key,
            app_base_url,
            api_base,
        })
    }
}

/// Shared Stripe client used by all billing services
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    http: reqwest::Client,
    config: StripeConfig,
}

impl StripeClient {
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::from_url(config.api_base.as_str(), config.secret_key.clone());
        Self {
            client,
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client from environment variables
    pub fn from_env() -> BillingResult<Self> {
        Ok(Self::new(StripeConfig::from_env()?))
    }

    /// Get the underlying async-stripe client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Raw HTTP client for Stripe endpoints the SDK doesn't cover
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Get the configuration
    pub fn config(&self) -> &StripeConfig {
        &self.config
    }
}
