pub mod analysis_controller;
pub mod api_client;
pub mod token_providers;
pub mod transient_failure_tracker;
