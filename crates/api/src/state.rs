//! Application state

use std::sync::Arc;

use basekit_billing::{BillingService, UsageService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Billing service, present when Stripe is configured
    pub billing: Option<Arc<BillingService>>,
    /// Usage reporting, served from plan defaults and independent of Stripe
    pub usage: UsageService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // Try to initialize billing if Stripe env vars are set
        let billing = match BillingService::from_env() {
            Ok(svc) => {
                tracing::info!("Stripe billing service initialized");
                Some(Arc::new(svc))
            }
            Err(e) => {
                tracing::warn!("Stripe billing not configured: {}", e);
                None
            }
        };

        Self {
            config,
            billing,
            usage: UsageService::new(),
        }
    }

    /// Build state with an explicit billing service, bypassing the
    /// environment. Used by tests.
    pub fn with_billing(config: Config, billing: Option<Arc<BillingService>>) -> Self {
        Self {
            config,
            billing,
            usage: UsageService::new(),
        }
    }
}
