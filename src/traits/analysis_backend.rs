use async_trait::async_trait;
use crate::errors::LeakDetectorResult;
use crate::structs::analysis::Analysis;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::report::ReportRef;

/// The three calls the analysis controller needs from the API.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn create_analysis(&self, request: &AnalysisRequest) -> LeakDetectorResult<Analysis>;

    async fn get_analysis(&self, analysis_id: &str) -> LeakDetectorResult<Analysis>;

    async fn get_report_by_analysis(&self, analysis_id: &str) -> LeakDetectorResult<ReportRef>;
}
