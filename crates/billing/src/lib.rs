// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Basekit Billing Module
//!
//! Handles Stripe integration for subscription lookup, customer sessions
//! (pricing table), and the hosted billing portal.
//!
//! ## Features
//!
//! - **Subscription Lookup**: Report the caller's current plan
//! - **Customer Sessions**: Create Stripe customer sessions for the pricing table
//! - **Billing Portal**: Create Stripe-hosted billing portal sessions
//! - **Usage**: Report per-plan usage against plan limits

pub mod client;
pub mod customer;
pub mod error;
pub mod plans;
pub mod portal;
pub mod subscriptions;
pub mod usage;

// Client
pub use client::{StripeClient, StripeConfig};

// Customer
pub use customer::{CustomerService, CustomerSession};

// Error
pub use error::{BillingError, BillingResult};

// Plans
pub use plans::{Plan, PlanType};

// Portal
pub use portal::{PortalService, PortalSession};

// Subscriptions
pub use subscriptions::{SubscriptionInfo, SubscriptionService};

// Usage
pub use usage::{PlanLimits, PlanUsage, UsageService, UsageSummary};

/// Main billing service that combines all billing functionality
pub struct BillingService {
    pub customer: CustomerService,
    pub portal: PortalService,
    pub subscriptions: SubscriptionService,
}

impl BillingService {
    /// Create a new billing service from environment variables
    pub fn from_env() -> BillingResult<Self> {
        let stripe = StripeClient::from_env()?;
        Ok(Self::with_client(stripe))
    }

    /// Create a new billing service with explicit config
    pub fn new(config: StripeConfig) -> Self {
        Self::with_client(StripeClient::new(config))
    }

    fn with_client(stripe: StripeClient) -> Self {
        Self {
            customer: CustomerService::new(stripe.clone()),
            portal: PortalService::new(stripe),
            subscriptions: SubscriptionService::new(),
        }
    }
}
