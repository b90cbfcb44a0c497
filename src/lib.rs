//! Command-line client for the landing page conversion analysis service.
//!
//! The core is [`services::analysis_controller::AnalysisController`], which
//! validates a URL, submits it, polls until the analysis finishes and
//! resolves the report id to hand off to.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use errors::{LeakDetectorError, LeakDetectorResult};
pub use services::analysis_controller::AnalysisController;
pub use services::api_client::ApiClient;
