use serde::{Deserialize, Serialize};

/// Envelope wrapping every JSON response of the analysis API.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    pub limit: u32,
    pub offset: u32,
    pub total: u32,
}

impl PaginationMeta {
    pub const fn has_more(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }
}

/// A page of results together with its pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: Option<PaginationMeta>,
}
