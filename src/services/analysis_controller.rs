use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use crate::config::constants::{
    PROGRESS_ANALYZING, PROGRESS_COMPLETED, PROGRESS_POLLING_SPAN, PROGRESS_SUBMITTING,
    PROGRESS_VALIDATING, QUOTA_EXCEEDED_CODE, NETWORK_ADVISORY_MESSAGE, SUBMISSION_TRANSPORT_MESSAGE,
};
use crate::enums::analysis_status::AnalysisStatus;
use crate::enums::controller_state::ControllerState;
use crate::errors::{LeakDetectorError, LeakDetectorResult};
use crate::helpers::url_normalizer::UrlNormalizer;
use crate::services::transient_failure_tracker::TransientFailureTracker;
use crate::structs::analysis::Analysis;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::handoff::Handoff;
use crate::traits::analysis_backend::AnalysisBackend;
use crate::traits::progress_observer::ProgressObserver;

enum PollOutcome {
    Pending(AnalysisStatus),
    Completed(String),
    Failed(Option<String>),
}

/// Drives one analysis from user input to a resolved report id.
///
/// `run` borrows the controller mutably, so a second submission cannot start
/// while a poll loop is active.
pub struct AnalysisController {
    backend: Arc<dyn AnalysisBackend>,
    observer: Arc<dyn ProgressObserver>,
    polling: PollingConfig,
    state: ControllerState,
    failures: TransientFailureTracker,
}

impl AnalysisController {
    pub fn new(backend: Arc<dyn AnalysisBackend>, observer: Arc<dyn ProgressObserver>, polling: PollingConfig) -> Self {
        let failures = TransientFailureTracker::new(polling.transient_failure_threshold, polling.failure_counter_reset());
        Self {
            backend,
            observer,
            polling,
            state: ControllerState::Idle,
            failures,
        }
    }

    pub const fn state(&self) -> ControllerState {
        self.state
    }

    pub async fn run(&mut self, input: &str, cancel: &CancellationToken) -> LeakDetectorResult<Handoff> {
        self.transition(ControllerState::Validating, PROGRESS_VALIDATING);
        let url = match UrlNormalizer::normalize(input) {
            Ok(url) => url,
            Err(e) => return Err(self.fail(e)),
        };

        self.transition(ControllerState::Submitting, PROGRESS_SUBMITTING);
        let analysis = match self.submit(&url, cancel).await {
            Ok(analysis) => analysis,
            Err(e) => return Err(self.fail(e)),
        };
        log::info!("🚀 Analysis {} queued for {}", analysis.id, url);

        self.transition(ControllerState::Analyzing, PROGRESS_ANALYZING);
        let result = self.poll_until_terminal(&analysis.id, cancel).await;
        self.failures.on_loop_end();

        match result {
            Ok(report_id) => {
                let handoff = Handoff {
                    analysis_id: analysis.id,
                    report_id,
                    url,
                };
                self.transition(ControllerState::Completed, PROGRESS_COMPLETED);
                self.observer.on_navigate(&handoff);
                Ok(handoff)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    async fn submit(&self, url: &str, cancel: &CancellationToken) -> LeakDetectorResult<Analysis> {
        let request = AnalysisRequest::new(url.to_string());
        let result = Self::cancellable(cancel, None, self.backend.create_analysis(&request)).await?;
        result.map_err(Self::classify_submission_error)
    }

    fn classify_submission_error(error: LeakDetectorError) -> LeakDetectorError {
        match error {
            LeakDetectorError::ApiError { ref code, .. } if code.as_deref() == Some(QUOTA_EXCEEDED_CODE) => {
                LeakDetectorError::quota_exceeded()
            }
            LeakDetectorError::ApiError { code: None, status_code, message, .. } => {
                log::debug!("Submission rejected with HTTP {} and no error body: {}", status_code, message);
                LeakDetectorError::submission_error(None)
            }
            LeakDetectorError::ApiError { message, .. } => LeakDetectorError::submission_error(Some(&message)),
            LeakDetectorError::AuthError { .. } => error,
            other => {
                log::debug!("Submission transport failure: {}", other);
                LeakDetectorError::submission_error(Some(SUBMISSION_TRANSPORT_MESSAGE))
            }
        }
    }

    async fn poll_until_terminal(&mut self, analysis_id: &str, cancel: &CancellationToken) -> LeakDetectorResult<String> {
        let mut attempts: u32 = 0;

        while attempts < self.polling.max_attempts {
            Self::cancellable(cancel, Some(analysis_id), tokio::time::sleep(self.polling.interval())).await?;
            attempts += 1;

            let outcome = Self::cancellable(cancel, Some(analysis_id), self.poll_once(analysis_id)).await?;
            match outcome {
                Ok(PollOutcome::Completed(report_id)) => {
                    log::info!("✅ Analysis {} completed after {} polls", analysis_id, attempts);
                    return Ok(report_id);
                }
                Ok(PollOutcome::Failed(message)) => {
                    log::info!("❌ Analysis {} failed after {} polls", analysis_id, attempts);
                    return Err(LeakDetectorError::analysis_failed(analysis_id, message.as_deref()));
                }
                Ok(PollOutcome::Pending(status)) => {
                    log::debug!("Poll {}/{} for {}: {}", attempts, self.polling.max_attempts, analysis_id, status);
                    self.failures.record_success();
                    let label = ControllerState::for_poll(
                        attempts,
                        self.polling.scraping_phase_polls,
                        self.polling.analyzing_phase_polls,
                    );
                    self.transition(label, Self::poll_progress(attempts));
                }
                Err(e) => {
                    log::warn!("⚠️ Poll {} for {} failed: {}", attempts, analysis_id, e);
                    if self.failures.record_failure() {
                        self.observer.on_advisory(NETWORK_ADVISORY_MESSAGE);
                    }
                }
            }
        }

        Err(LeakDetectorError::Timeout {
            analysis_id: analysis_id.to_string(),
            attempts,
        })
    }

    /// One status read. A completed analysis also resolves its report id; if that
    /// lookup fails the whole poll counts as a transient failure and is retried.
    async fn poll_once(&self, analysis_id: &str) -> LeakDetectorResult<PollOutcome> {
        let analysis = self.backend.get_analysis(analysis_id).await?;

        if !analysis.status.is_terminal() {
            return Ok(PollOutcome::Pending(analysis.status));
        }
        if analysis.status == AnalysisStatus::Failed {
            return Ok(PollOutcome::Failed(analysis.error_message));
        }

        let report = self.backend.get_report_by_analysis(analysis_id).await?;
        Ok(PollOutcome::Completed(report.id))
    }

    async fn cancellable<T>(
        cancel: &CancellationToken,
        analysis_id: Option<&str>,
        future: impl Future<Output = T>,
    ) -> LeakDetectorResult<T> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(LeakDetectorError::Cancelled {
                analysis_id: analysis_id.map(ToString::to_string),
            }),
            value = future => Ok(value),
        }
    }

    fn poll_progress(attempts: u32) -> u8 {
        let step = u8::try_from(attempts.min(PROGRESS_POLLING_SPAN)).unwrap_or(u8::MAX);
        PROGRESS_ANALYZING.saturating_add(step)
    }

    fn transition(&mut self, state: ControllerState, progress: u8) {
        if self.state != state {
            if state.is_polling() && self.state.is_polling() {
                log::debug!("Controller {} -> {}", self.state, state);
            } else {
                log::info!("Controller {} -> {}", self.state, state);
            }
        }
        self.state = state;
        self.observer.on_state_change(state, progress);
    }

    fn fail(&mut self, error: LeakDetectorError) -> LeakDetectorError {
        self.observer.on_error(&error);
        self.state = ControllerState::Idle;
        self.observer.on_state_change(ControllerState::Idle, 0);
        error
    }
}
