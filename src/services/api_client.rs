use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use crate::config::constants::{
    ANALYSES_PATH, BILLING_STATUS_PATH, REPORTS_BY_ANALYSIS_PATH, REPORTS_PATH,
};
use crate::errors::{LeakDetectorError, LeakDetectorResult};
use crate::structs::analysis::Analysis;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::api_response::{ApiResponse, Page};
use crate::structs::billing_status::BillingStatus;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::report::{Report, ReportListItem, ReportRef};
use crate::traits::analysis_backend::AnalysisBackend;
use crate::traits::token_provider::TokenProvider;

/// Typed client for the analysis API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    token_provider: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, token_provider: Arc<dyn TokenProvider>) -> LeakDetectorResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("leak-detector-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token_provider,
        })
    }

    pub fn from_config(config: &ApiConfig, token_provider: Arc<dyn TokenProvider>) -> LeakDetectorResult<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.request_timeout_secs), token_provider)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches a freshly fetched bearer token.
    async fn authorized(&self, builder: RequestBuilder) -> LeakDetectorResult<RequestBuilder> {
        let token = self.token_provider.access_token().await?;
        Ok(builder.bearer_auth(token))
    }

    async fn send(&self, operation: &str, builder: RequestBuilder) -> LeakDetectorResult<reqwest::Response> {
        let request = self.authorized(builder).await?;
        request.send().await.map_err(|e| LeakDetectorError::NetworkError {
            operation: operation.to_string(),
            url: e.url().map(ToString::to_string),
            status_code: e.status().map(|s| s.as_u16()),
            reason: e.to_string(),
        })
    }

    async fn request_envelope<T: DeserializeOwned>(
        &self,
        operation: &str,
        builder: RequestBuilder,
    ) -> LeakDetectorResult<ApiResponse<T>> {
        let response = self.send(operation, builder).await?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            LeakDetectorError::network_error(operation, e.url().map(reqwest::Url::as_str), &e.to_string())
        })?;

        Self::decode_envelope(operation, status, &body)
    }

    fn decode_envelope<T: DeserializeOwned>(operation: &str, status: StatusCode, body: &str) -> LeakDetectorResult<ApiResponse<T>> {
        let envelope = serde_json::from_str::<ApiResponse<T>>(body);

        match envelope {
            Ok(envelope) if status.is_success() && envelope.success => Ok(envelope),
            Ok(envelope) => {
                let (code, message) = envelope
                    .error
                    .map(|e| (Some(e.code), e.message))
                    .unwrap_or_else(|| (None, Self::status_text(status)));
                Err(LeakDetectorError::ApiError {
                    operation: operation.to_string(),
                    status_code: status.as_u16(),
                    code,
                    message,
                })
            }
            Err(e) if status.is_success() => Err(LeakDetectorError::parse_error(
                "JSON",
                &format!("{} returned an unreadable body: {}", operation, e),
            )),
            Err(_) => Err(LeakDetectorError::api_error(operation, status.as_u16(), None, &Self::status_text(status))),
        }
    }

    fn status_text(status: StatusCode) -> String {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", status.as_u16()), ToString::to_string)
    }

    async fn request_data<T: DeserializeOwned>(&self, operation: &str, builder: RequestBuilder) -> LeakDetectorResult<T> {
        self.request_envelope::<T>(operation, builder)
            .await?
            .data
            .ok_or_else(|| LeakDetectorError::parse_error("JSON", &format!("{} response has no data", operation)))
    }

    async fn request_page<T: DeserializeOwned>(&self, operation: &str, builder: RequestBuilder) -> LeakDetectorResult<Page<T>> {
        let envelope = self.request_envelope::<Vec<T>>(operation, builder).await?;
        Ok(Page {
            items: envelope.data.unwrap_or_default(),
            meta: envelope.meta,
        })
    }

    pub async fn list_analyses(&self, limit: u32, offset: u32) -> LeakDetectorResult<Page<Analysis>> {
        let builder = self.client.get(self.url(ANALYSES_PATH)).query(&[("limit", limit), ("offset", offset)]);
        self.request_page("list analyses", builder).await
    }

    pub async fn get_report(&self, report_id: &str) -> LeakDetectorResult<Report> {
        let builder = self.client.get(self.url(&format!("{}/{}", REPORTS_PATH, report_id)));
        self.request_data("get report", builder).await
    }

    /// Full report for an analysis, as opposed to the id-only lookup used while polling.
    pub async fn get_full_report_by_analysis(&self, analysis_id: &str) -> LeakDetectorResult<Report> {
        let builder = self.client.get(self.url(&format!("{}/{}", REPORTS_BY_ANALYSIS_PATH, analysis_id)));
        self.request_data("get report by analysis", builder).await
    }

    pub async fn list_reports(&self, limit: u32, offset: u32) -> LeakDetectorResult<Page<ReportListItem>> {
        let builder = self.client.get(self.url(REPORTS_PATH)).query(&[("limit", limit), ("offset", offset)]);
        self.request_page("list reports", builder).await
    }

    pub async fn billing_status(&self) -> LeakDetectorResult<BillingStatus> {
        let builder = self.client.get(self.url(BILLING_STATUS_PATH));
        self.request_data("billing status", builder).await
    }

    pub async fn download_report_pdf(&self, report_id: &str) -> LeakDetectorResult<Vec<u8>> {
        let operation = "download report PDF";
        let builder = self.client.get(self.url(&format!("{}/{}/pdf", REPORTS_PATH, report_id)));
        let response = self.send(operation, builder).await?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            return Err(LeakDetectorError::entitlement_error(operation));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match Self::decode_envelope::<serde_json::Value>(operation, status, &body) {
                Err(e) => e,
                Ok(_) => LeakDetectorError::api_error(operation, status.as_u16(), None, &Self::status_text(status)),
            });
        }

        let bytes = response.bytes().await.map_err(|e| LeakDetectorError::network_error(operation, None, &e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl AnalysisBackend for ApiClient {
    async fn create_analysis(&self, request: &AnalysisRequest) -> LeakDetectorResult<Analysis> {
        let builder = self.client.post(self.url(ANALYSES_PATH)).json(request);
        self.request_data("create analysis", builder).await
    }

    async fn get_analysis(&self, analysis_id: &str) -> LeakDetectorResult<Analysis> {
        let builder = self.client.get(self.url(&format!("{}/{}", ANALYSES_PATH, analysis_id)));
        self.request_data("get analysis", builder).await
    }

    async fn get_report_by_analysis(&self, analysis_id: &str) -> LeakDetectorResult<ReportRef> {
        let builder = self.client.get(self.url(&format!("{}/{}", REPORTS_BY_ANALYSIS_PATH, analysis_id)));
        self.request_data("get report by analysis", builder).await
    }
}
