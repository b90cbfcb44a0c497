pub mod analysis;
pub mod analysis_request;
pub mod api_response;
pub mod billing_status;
pub mod cli;
pub mod config;
pub mod handoff;
pub mod report;
