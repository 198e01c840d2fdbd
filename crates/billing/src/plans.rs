//! Plan tiers and their limits

use serde::{Deserialize, Serialize};

/// Application-defined subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Free,
    /// Paid tier sold through the Stripe pricing table
    Pro,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Free => "FREE",
            PlanType::Pro => "PRO",
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Subscription plan configuration
#[derive(Debug, Clone)]
pub struct Plan {
    pub plan_type: PlanType,
    pub max_items: u32,
    pub max_storage: u32,
}

impl Plan {
    /// Free tier: 10 items, 100 storage units
    pub fn free() -> Self {
        Self {
            plan_type: PlanType::Free,
            max_items: 10,
            max_storage: 100,
        }
    }
}
