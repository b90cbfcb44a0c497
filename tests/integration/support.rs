use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use leak_detector::enums::analysis_status::AnalysisStatus;
use leak_detector::enums::controller_state::ControllerState;
use leak_detector::errors::{LeakDetectorError, LeakDetectorResult};
use leak_detector::structs::analysis::Analysis;
use leak_detector::structs::analysis_request::AnalysisRequest;
use leak_detector::structs::config::polling_config::PollingConfig;
use leak_detector::structs::handoff::Handoff;
use leak_detector::structs::report::ReportRef;
use leak_detector::traits::analysis_backend::AnalysisBackend;
use leak_detector::traits::progress_observer::ProgressObserver;
use leak_detector::traits::token_provider::TokenProvider;

pub fn analysis(id: &str, status: AnalysisStatus) -> Analysis {
    Analysis {
        id: id.to_string(),
        url: "https://example.com".to_string(),
        status,
        error_code: None,
        error_message: None,
        created_at: None,
        started_at: None,
        completed_at: None,
    }
}

pub fn failed_analysis(id: &str, message: Option<&str>) -> Analysis {
    Analysis {
        error_code: Some("ANALYSIS_FAILED".to_string()),
        error_message: message.map(ToString::to_string),
        ..analysis(id, AnalysisStatus::Failed)
    }
}

pub fn transient() -> LeakDetectorError {
    LeakDetectorError::network_error("get analysis", None, "connection reset by peer")
}

pub fn fast_polling(max_attempts: u32) -> PollingConfig {
    PollingConfig {
        interval_ms: 1,
        max_attempts,
        navigation_grace_ms: 0,
        ..PollingConfig::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Create(String),
    Get(String),
    ReportLookup(String),
}

/// Backend that replays scripted responses and records every call.
pub struct ScriptedBackend {
    create: Mutex<Option<LeakDetectorResult<Analysis>>>,
    polls: Mutex<VecDeque<LeakDetectorResult<Analysis>>>,
    reports: Mutex<VecDeque<LeakDetectorResult<ReportRef>>>,
    calls: Mutex<Vec<BackendCall>>,
    cancel_after_polls: Option<(usize, CancellationToken)>,
}

impl ScriptedBackend {
    pub fn new(create: LeakDetectorResult<Analysis>) -> Self {
        Self {
            create: Mutex::new(Some(create)),
            polls: Mutex::new(VecDeque::new()),
            reports: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            cancel_after_polls: None,
        }
    }

    pub fn with_polls(self, polls: Vec<LeakDetectorResult<Analysis>>) -> Self {
        *self.polls.lock().unwrap() = polls.into();
        self
    }

    pub fn with_reports(self, reports: Vec<LeakDetectorResult<ReportRef>>) -> Self {
        *self.reports.lock().unwrap() = reports.into();
        self
    }

    pub fn cancelling_after(mut self, polls: usize, token: CancellationToken) -> Self {
        self.cancel_after_polls = Some((polls, token));
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }
}

#[async_trait]
impl AnalysisBackend for ScriptedBackend {
    async fn create_analysis(&self, request: &AnalysisRequest) -> LeakDetectorResult<Analysis> {
        self.calls.lock().unwrap().push(BackendCall::Create(request.url.clone()));
        self.create
            .lock()
            .unwrap()
            .take()
            .expect("create_analysis called more than once")
    }

    async fn get_analysis(&self, analysis_id: &str) -> LeakDetectorResult<Analysis> {
        let polls_so_far = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(BackendCall::Get(analysis_id.to_string()));
            calls.iter().filter(|c| matches!(c, BackendCall::Get(_))).count()
        };
        if let Some((after, token)) = &self.cancel_after_polls {
            if polls_so_far >= *after {
                token.cancel();
            }
        }
        // Once the script runs out the analysis stays in processing.
        self.polls
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(analysis(analysis_id, AnalysisStatus::Processing)))
    }

    async fn get_report_by_analysis(&self, analysis_id: &str) -> LeakDetectorResult<ReportRef> {
        self.calls.lock().unwrap().push(BackendCall::ReportLookup(analysis_id.to_string()));
        self.reports
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LeakDetectorError::api_error("get report by analysis", 404, Some("NOT_FOUND"), "Report not found")))
    }
}

/// Observer that records everything the controller reports.
#[derive(Default)]
pub struct RecordingObserver {
    pub states: Mutex<Vec<(ControllerState, u8)>>,
    pub advisories: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<LeakDetectorError>>,
    pub navigations: Mutex<Vec<Handoff>>,
}

impl RecordingObserver {
    pub fn state_sequence(&self) -> Vec<ControllerState> {
        let mut sequence: Vec<ControllerState> = Vec::new();
        for (state, _) in self.states.lock().unwrap().iter() {
            if sequence.last() != Some(state) {
                sequence.push(*state);
            }
        }
        sequence
    }

    pub fn advisory_count(&self) -> usize {
        self.advisories.lock().unwrap().len()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_state_change(&self, state: ControllerState, progress: u8) {
        self.states.lock().unwrap().push((state, progress));
    }

    fn on_advisory(&self, message: &str) {
        self.advisories.lock().unwrap().push(message.to_string());
    }

    fn on_error(&self, error: &LeakDetectorError) {
        self.errors.lock().unwrap().push(error.clone());
    }

    fn on_navigate(&self, handoff: &Handoff) {
        self.navigations.lock().unwrap().push(handoff.clone());
    }
}

/// Hands out a different token on every call, like a rotating session.
#[derive(Default)]
pub struct RotatingTokenProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl TokenProvider for RotatingTokenProvider {
    async fn access_token(&self) -> LeakDetectorResult<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("token-{}", n))
    }
}
