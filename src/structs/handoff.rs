use serde::{Deserialize, Serialize};

/// Navigation target produced when an analysis completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Handoff {
    pub analysis_id: String,
    pub report_id: String,
    pub url: String,
}

impl Handoff {
    pub fn report_path(&self) -> String {
        format!("/reports/{}", self.report_id)
    }
}
