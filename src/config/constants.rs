// Polling policy
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 240;
pub const DEFAULT_TRANSIENT_FAILURE_THRESHOLD: u32 = 3;
pub const DEFAULT_SCRAPING_PHASE_POLLS: u32 = 10;
pub const DEFAULT_ANALYZING_PHASE_POLLS: u32 = 30;
pub const DEFAULT_NAVIGATION_GRACE_MS: u64 = 500;

// Progress percentages shown while an analysis runs
pub const PROGRESS_VALIDATING: u8 = 10;
pub const PROGRESS_SUBMITTING: u8 = 20;
pub const PROGRESS_ANALYZING: u8 = 40;
pub const PROGRESS_POLLING_SPAN: u32 = 50;
pub const PROGRESS_COMPLETED: u8 = 100;

// HTTP
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LIST_LIMIT: u32 = 20;

pub const ANALYSES_PATH: &str = "/api/v1/analyses";
pub const REPORTS_PATH: &str = "/api/v1/reports";
pub const REPORTS_BY_ANALYSIS_PATH: &str = "/api/v1/reports/by-analysis";
pub const BILLING_STATUS_PATH: &str = "/api/v1/billing/status";

pub const QUOTA_EXCEEDED_CODE: &str = "QUOTA_EXCEEDED";

// Environment
pub const ACCESS_TOKEN_ENV: &str = "LEAK_DETECTOR_ACCESS_TOKEN";
pub const API_URL_ENV: &str = "LEAK_DETECTOR_API_URL";
pub const APP_URL_ENV: &str = "LEAK_DETECTOR_APP_URL";
pub const CONFIG_DIR_NAME: &str = "leak-detector";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// User-facing messages
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";
pub const QUOTA_EXCEEDED_MESSAGE: &str = "Monthly analysis limit reached. Upgrade to continue.";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to start analysis";
pub const SUBMISSION_TRANSPORT_MESSAGE: &str = "An error occurred. Please try again.";
pub const ANALYSIS_FAILED_DEFAULT_MESSAGE: &str = "Analysis failed";
pub const ANALYSIS_TIMEOUT_MESSAGE: &str = "Analysis timed out. Please try again.";
pub const NETWORK_ADVISORY_MESSAGE: &str = "Network issue detected. Retrying...";
pub const PDF_ENTITLEMENT_MESSAGE: &str = "PDF export requires a Pro plan.";

pub const PDF_FILE_PREFIX: &str = "leak-detector-report-";
