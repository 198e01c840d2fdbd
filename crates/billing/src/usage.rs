//! Usage reporting for the current plan

use serde::Serialize;

use crate::plans::{Plan, PlanType};

/// Limits attached to the caller's plan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLimits {
    pub max_items: u32,
    pub max_storage: u32,
}

/// Current consumption against those limits
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanUsage {
    pub items: u32,
    pub storage: u32,
}

/// Usage summary for the caller's plan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub plan_type: PlanType,
    pub limits: PlanLimits,
    pub usage: PlanUsage,
    pub can_add_more: bool,
}

/// Service reporting per-plan usage
#[derive(Debug, Clone, Default)]
pub struct UsageService;

impl UsageService {
    pub fn new() -> Self {
        Self
    }

    /// Usage for the caller's current plan.
    ///
    /// TODO: count the caller's items and storage from the persistence layer.
    /// Until then every caller reports zero usage against the free tier.
    pub fn current_usage(&self) -> UsageSummary {
        let plan = Plan::free();
        let usage = PlanUsage {
            items: 0,
            storage: 0,
        };

        UsageSummary {
            plan_type: plan.plan_type,
            can_add_more: usage.items < plan.max_items,
            limits: PlanLimits {
                max_items: plan.max_items,
                max_storage: plan.max_storage,
            },
            usage,
        }
    }
}
