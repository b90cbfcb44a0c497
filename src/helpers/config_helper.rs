use crate::config::constants::{
    ACCESS_TOKEN_ENV, DEFAULT_ANALYZING_PHASE_POLLS, DEFAULT_API_URL, DEFAULT_APP_URL,
    DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_NAVIGATION_GRACE_MS, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SCRAPING_PHASE_POLLS, DEFAULT_TRANSIENT_FAILURE_THRESHOLD,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_url() -> String {
        DEFAULT_API_URL.to_string()
    }

    pub fn default_app_url() -> String {
        DEFAULT_APP_URL.to_string()
    }

    pub const fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_token_env() -> String {
        ACCESS_TOKEN_ENV.to_string()
    }

    pub const fn default_interval_ms() -> u64 {
        DEFAULT_POLL_INTERVAL_MS
    }

    pub const fn default_max_attempts() -> u32 {
        DEFAULT_MAX_POLL_ATTEMPTS
    }

    pub const fn default_transient_failure_threshold() -> u32 {
        DEFAULT_TRANSIENT_FAILURE_THRESHOLD
    }

    pub const fn default_scraping_phase_polls() -> u32 {
        DEFAULT_SCRAPING_PHASE_POLLS
    }

    pub const fn default_analyzing_phase_polls() -> u32 {
        DEFAULT_ANALYZING_PHASE_POLLS
    }

    pub const fn default_navigation_grace_ms() -> u64 {
        DEFAULT_NAVIGATION_GRACE_MS
    }

    pub const fn default_show_issues() -> bool {
        true
    }
}
