pub mod analysis_backend;
pub mod progress_observer;
pub mod token_provider;
