use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::services::transient_failure_tracker::FailureCounterReset;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PollingConfig {
    #[serde(default = "ConfigHelper::default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "ConfigHelper::default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "ConfigHelper::default_transient_failure_threshold")]
    pub transient_failure_threshold: u32,

    /// Polls below this count are labelled "scraping".
    #[serde(default = "ConfigHelper::default_scraping_phase_polls")]
    pub scraping_phase_polls: u32,

    /// Polls below this count (and past scraping) are labelled "analyzing".
    #[serde(default = "ConfigHelper::default_analyzing_phase_polls")]
    pub analyzing_phase_polls: u32,

    #[serde(default = "ConfigHelper::default_navigation_grace_ms")]
    pub navigation_grace_ms: u64,

    #[serde(default)]
    pub reset_failures_on_success: bool,
}

impl PollingConfig {
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub const fn navigation_grace(&self) -> Duration {
        Duration::from_millis(self.navigation_grace_ms)
    }

    pub const fn failure_counter_reset(&self) -> FailureCounterReset {
        if self.reset_failures_on_success {
            FailureCounterReset::OnSuccess
        } else {
            FailureCounterReset::OnLoopEnd
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: ConfigHelper::default_interval_ms(),
            max_attempts: ConfigHelper::default_max_attempts(),
            transient_failure_threshold: ConfigHelper::default_transient_failure_threshold(),
            scraping_phase_polls: ConfigHelper::default_scraping_phase_polls(),
            analyzing_phase_polls: ConfigHelper::default_analyzing_phase_polls(),
            navigation_grace_ms: ConfigHelper::default_navigation_grace_ms(),
            reset_failures_on_success: false,
        }
    }
}
