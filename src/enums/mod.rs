pub mod analysis_status;
pub mod commands;
pub mod controller_state;
pub mod issue_severity;
pub mod plan;
