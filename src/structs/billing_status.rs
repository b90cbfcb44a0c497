use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::plan::Plan;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionInfo {
    pub status: String,
    pub current_period_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingStatus {
    pub plan: Plan,
    pub analyses_used: u32,
    pub analyses_limit: u32,
    #[serde(default)]
    pub analyses_reset_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subscription: Option<SubscriptionInfo>,
}

impl BillingStatus {
    pub const fn remaining(&self) -> u32 {
        self.analyses_limit.saturating_sub(self.analyses_used)
    }
}
