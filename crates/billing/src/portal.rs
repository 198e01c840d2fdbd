//! Stripe billing portal sessions

use crate::client::StripeClient;
use crate::error::{BillingError, BillingResult};

/// Response for creating a portal session
#[derive(Debug, serde::Serialize)]
pub struct PortalSession {
    pub url: String,
}

/// Portal service for Stripe billing portal sessions
pub struct PortalService {
    stripe: StripeClient,
}

impl PortalService {
    pub fn new(stripe: StripeClient) -> Self {
        Self { stripe }
    }

    /// URL the portal sends users back to when they're done
    pub fn return_url(&self) -> String {
        format!("{}/billing", self.stripe.config().app_base_url)
    }

    /// Create a billing portal session for the caller.
    ///
    /// TODO: resolve the caller's Stripe customer from the persistence layer,
    /// then create a real BillingPortalSession returning to `return_url()`.
    /// No user -> customer mapping exists yet, so every call reports a
    /// missing billing account.
    pub async fn create_portal_session(&self) -> BillingResult<PortalSession> {
        Err(BillingError::NoBillingAccount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StripeConfig;

    fn test_service() -> PortalService {
        PortalService::new(StripeClient::new(StripeConfig {
            secret_key: "sk_test_123".to_string(),
            app_base_url: "https://app.example.com".to_string(),
            api_base: "https://api.stripe.com".to_string(),
        }))
    }

    #[tokio::test]
    async fn portal_session_always_reports_missing_account() {
        let err = test_service().create_portal_session().await.unwrap_err();
        assert!(matches!(err, BillingError::NoBillingAccount));
    }

    #[test]
    fn return_url_points_at_app_billing_page() {
        assert_eq!(test_service().return_url(), "https://app.example.com/billing");
    }
}
