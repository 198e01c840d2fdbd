//! Stripe customer creation and customer sessions

use std::collections::HashMap;

use serde::Deserialize;
use stripe::{CreateCustomer, Customer};

use crate::client::StripeClient;
use crate::error::{BillingError, BillingResult};

/// Customer session as returned by Stripe's /v1/customer_sessions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSession {
    /// Short-lived secret handed to the frontend pricing table
    pub client_secret: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Service for Stripe customers and customer sessions
pub struct CustomerService {
    stripe: StripeClient,
}

impl CustomerService {
    pub fn new(stripe: StripeClient) -> Self {
        Self { stripe }
    }

    /// Create a new Stripe customer.
    ///
    /// TODO: look up an existing customer from the persistence layer instead
    /// of creating a fresh one per call, once the user -> customer mapping
    /// exists.
    pub async fn create_customer(&self) -> BillingResult<Customer> {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), "api".to_string());

        let mut params = CreateCustomer::new();
        params.metadata = Some(metadata);

        let customer = Customer::create(self.stripe.inner(), params).await?;

        tracing::info!(customer_id = %customer.id, "Created Stripe customer");

        Ok(customer)
    }

    /// Create a customer session scoped to the pricing table component.
    ///
    /// async-stripe 0.39 has no bindings for /v1/customer_sessions, so this
    /// calls the endpoint directly using Stripe's form-encoded nested
    /// parameter format.
    pub async fn create_customer_session(
        &self,
        customer_id: &str,
    ) -> BillingResult<CustomerSession> {
        let form_params = [
            ("customer", customer_id),
            ("components[pricing_table][enabled]", "true"),
        ];

        let response = self
            .stripe
            .http()
            .post(format!(
                "{}/v1/customer_sessions",
                self.stripe.config().api_base
            ))
            .bearer_auth(&self.stripe.config().secret_key)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| BillingError::StripeApi(format!("Failed to call Stripe API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                error_body = %error_body,
                "Stripe customer_sessions API failed"
            );
            return Err(BillingError::StripeApi(format!(
                "Stripe API error ({}): {}",
                status, error_body
            )));
        }

        let session: CustomerSession = response.json().await.map_err(|e| {
            BillingError::StripeApi(format!("Failed to parse Stripe response: {}", e))
        })?;

        tracing::info!(customer_id = %customer_id, "Created Stripe customer session");

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StripeConfig;

    fn test_service(api_base: String) -> CustomerService {
        CustomerService::new(StripeClient::new(StripeConfig {
            secret_key: "sk_test_123".to_string(),
            app_base_url: "http://localhost:5173".to_string(),
            api_base,
        }))
    }

    #[tokio::test]
    async fn customer_session_returns_client_secret() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/customer_sessions")
            .match_header("authorization", "Bearer sk_test_123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"object":"customer_session","client_secret":"cuss_secret_abc","customer":"cus_123","expires_at":1735689600}"#,
            )
            .create_async()
            .await;

        let service = test_service(server.url());
        let session = service.create_customer_session("cus_123").await.unwrap();

        assert_eq!(session.client_secret, "cuss_secret_abc");
        assert_eq!(session.expires_at, Some(1735689600));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn customer_session_surfaces_stripe_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/customer_sessions")
            .with_status(400)
            .with_body(r#"{"error":{"message":"No such customer: cus_missing"}}"#)
            .create_async()
            .await;

        let service = test_service(server.url());
        let err = service
            .create_customer_session("cus_missing")
            .await
            .unwrap_err();

        match err {
            BillingError::StripeApi(msg) => {
                assert!(msg.contains("400"), "error should carry the status: {}", msg);
                assert!(
                    msg.contains("No such customer"),
                    "error should carry the provider message: {}",
                    msg
                );
            }
            other => panic!("expected StripeApi error, got {:?}", other),
        }
    }
}
