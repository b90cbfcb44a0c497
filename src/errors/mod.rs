use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::constants::{
    ANALYSIS_FAILED_DEFAULT_MESSAGE, ANALYSIS_TIMEOUT_MESSAGE, INVALID_URL_MESSAGE,
    PDF_ENTITLEMENT_MESSAGE, QUOTA_EXCEEDED_MESSAGE, SUBMISSION_FAILED_MESSAGE,
};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeakDetectorError {
    // Local input errors
    #[error("{message}")]
    ValidationError {
        field: String,
        value: String,
        message: String,
    },

    // Submission errors
    #[error("{message}")]
    QuotaExceeded { message: String },
    #[error("{reason}")]
    SubmissionError { reason: String },

    // Polling outcomes
    #[error("{message}")]
    AnalysisFailed {
        analysis_id: String,
        message: String,
    },
    #[error("{}", ANALYSIS_TIMEOUT_MESSAGE)]
    Timeout { analysis_id: String, attempts: u32 },
    #[error("Analysis cancelled")]
    Cancelled { analysis_id: Option<String> },

    // Network/API errors
    #[error("{operation} failed with HTTP {status_code}: {message}")]
    ApiError {
        operation: String,
        status_code: u16,
        code: Option<String>,
        message: String,
    },
    #[error("{message}")]
    EntitlementError { operation: String, message: String },
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },
    #[error("Parse error in {content_type}: {reason}")]
    ParseError { content_type: String, reason: String },
    #[error("Authentication error: {reason}")]
    AuthError { reason: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError { path: String, reason: String },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError { operation: String, reason: String },
}

impl LeakDetectorError {
    pub fn invalid_url(value: &str) -> Self {
        Self::ValidationError {
            field: "url".to_string(),
            value: value.to_string(),
            message: INVALID_URL_MESSAGE.to_string(),
        }
    }

    pub fn quota_exceeded() -> Self {
        Self::QuotaExceeded {
            message: QUOTA_EXCEEDED_MESSAGE.to_string(),
        }
    }

    pub fn submission_error(reason: Option<&str>) -> Self {
        Self::SubmissionError {
            reason: reason
                .filter(|r| !r.trim().is_empty())
                .unwrap_or(SUBMISSION_FAILED_MESSAGE)
                .to_string(),
        }
    }

    pub fn analysis_failed(analysis_id: &str, message: Option<&str>) -> Self {
        Self::AnalysisFailed {
            analysis_id: analysis_id.to_string(),
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(ANALYSIS_FAILED_DEFAULT_MESSAGE)
                .to_string(),
        }
    }

    pub fn api_error(operation: &str, status_code: u16, code: Option<&str>, message: &str) -> Self {
        Self::ApiError {
            operation: operation.to_string(),
            status_code,
            code: code.map(ToString::to_string),
            message: message.to_string(),
        }
    }

    pub fn entitlement_error(operation: &str) -> Self {
        Self::EntitlementError {
            operation: operation.to_string(),
            message: PDF_ENTITLEMENT_MESSAGE.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(ToString::to_string),
            status_code: None,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Error code carried by a server error envelope, if any.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::ApiError { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ConfigurationFileError { .. } | Self::SystemError { .. })
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } | Self::AnalysisFailed { .. } => ErrorSeverity::High,
            Self::Timeout { .. }
            | Self::SubmissionError { .. }
            | Self::ApiError { .. }
            | Self::NetworkError { .. }
            | Self::ParseError { .. }
            | Self::AuthError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. }
            | Self::QuotaExceeded { .. }
            | Self::EntitlementError { .. }
            | Self::Cancelled { .. }
            | Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    /// Message shown to the user, with an actionable hint where one exists.
    pub fn user_message(&self) -> String {
        match self {
            Self::QuotaExceeded { message } | Self::EntitlementError { message, .. } => {
                format!("{}\n💡 View pricing plans to upgrade your account", message)
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::AuthError { reason } => {
                format!("Authentication error: {}\n💡 Sign in to the web app and export a fresh access token", reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            other => other.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for leak-detector operations
pub type LeakDetectorResult<T> = Result<T, LeakDetectorError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &LeakDetectorError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if matches!(severity, ErrorSeverity::Critical) {
            eprintln!("🚨 Critical error detected - application may need to exit");
        }

        if error.is_recoverable() && !matches!(error, LeakDetectorError::Cancelled { .. }) {
            eprintln!("🔄 You can retry the operation");
        }
    }

    /// Process exit code for an error returned by a command.
    pub const fn exit_code(error: &LeakDetectorError) -> i32 {
        match error {
            LeakDetectorError::ValidationError { .. } => 2,
            LeakDetectorError::QuotaExceeded { .. } => 3,
            LeakDetectorError::Timeout { .. } => 4,
            LeakDetectorError::AnalysisFailed { .. } => 5,
            LeakDetectorError::Cancelled { .. } => 130,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for LeakDetectorError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LeakDetectorError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for LeakDetectorError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<url::ParseError> for LeakDetectorError {
    fn from(error: url::ParseError) -> Self {
        Self::ParseError {
            content_type: "URL".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for LeakDetectorError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
