use serde::{Deserialize, Serialize};

/// When the transient-failure counter goes back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FailureCounterReset {
    /// Only when the poll loop ends. Failures accumulate across successful polls
    /// within one run, so the advisory fires at most once per run.
    #[default]
    OnLoopEnd,
    /// After every successful poll as well, so a later burst can raise it again.
    OnSuccess,
}

/// Counts transient poll failures and decides when to raise the advisory.
#[derive(Debug, Clone)]
pub struct TransientFailureTracker {
    failures: u32,
    threshold: u32,
    reset: FailureCounterReset,
}

impl TransientFailureTracker {
    pub const fn new(threshold: u32, reset: FailureCounterReset) -> Self {
        Self {
            failures: 0,
            threshold,
            reset,
        }
    }

    /// Records one failure. Returns `true` exactly when the counter reaches the threshold.
    pub fn record_failure(&mut self) -> bool {
        self.failures = self.failures.saturating_add(1);
        self.failures == self.threshold
    }

    pub fn record_success(&mut self) {
        if matches!(self.reset, FailureCounterReset::OnSuccess) {
            self.failures = 0;
        }
    }

    pub fn on_loop_end(&mut self) {
        self.failures = 0;
    }

    pub const fn failures(&self) -> u32 {
        self.failures
    }
}
