use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
}

impl AnalysisRequest {
    pub const fn new(url: String) -> Self {
        Self { url }
    }
}
