use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::issue_severity::IssueSeverity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportIssue {
    #[serde(default)]
    pub severity: IssueSeverity,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportCategory {
    pub name: String,
    #[serde(default)]
    pub label: String,
    pub score: u8,
    #[serde(default)]
    pub issues: Vec<ReportIssue>,
}

impl ReportCategory {
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub load_time_ms: Option<u64>,
    pub word_count: Option<u64>,
    pub image_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub id: String,
    #[serde(default)]
    pub analysis_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub categories: Vec<ReportCategory>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    #[serde(default)]
    pub page_metadata: Option<PageMetadata>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Report {
    pub fn issues_with_severity(&self, severity: IssueSeverity) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.issues.iter())
            .filter(|i| i.severity == severity)
            .count()
    }
}

/// Summary row returned by the report listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportListItem {
    pub id: String,
    pub analysis_id: String,
    #[serde(default)]
    pub url: String,
    pub score: u8,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Minimal view used to resolve the report id of a finished analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRef {
    pub id: String,
}
