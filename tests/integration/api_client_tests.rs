use std::sync::Arc;
use std::time::Duration;
use mockito::{Matcher, Server};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use leak_detector::enums::analysis_status::AnalysisStatus;
use leak_detector::enums::plan::Plan;
use leak_detector::config::constants::SUBMISSION_FAILED_MESSAGE;
use leak_detector::errors::LeakDetectorError;
use leak_detector::services::token_providers::static_token_provider::StaticTokenProvider;
use leak_detector::structs::analysis_request::AnalysisRequest;
use leak_detector::traits::analysis_backend::AnalysisBackend;
use leak_detector::traits::token_provider::TokenProvider;
use leak_detector::{AnalysisController, ApiClient};

use super::support::{fast_polling, RecordingObserver, RotatingTokenProvider};

fn client(server: &Server, provider: Arc<dyn TokenProvider>) -> ApiClient {
    ApiClient::new(&server.url(), Duration::from_secs(5), provider).unwrap()
}

fn static_client(server: &Server) -> ApiClient {
    client(server, Arc::new(StaticTokenProvider::new("secret-token")))
}

fn analysis_body(id: &str, status: &str) -> String {
    json!({
        "success": true,
        "data": {
            "id": id,
            "url": "https://example.com",
            "status": status,
            "created_at": "2025-01-10T12:00:00Z"
        }
    })
    .to_string()
}

#[tokio::test]
async fn create_analysis_sends_bearer_token_and_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/analyses")
        .match_header("authorization", "Bearer secret-token")
        .match_body(Matcher::Json(json!({ "url": "https://example.com" })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(analysis_body("a1", "pending"))
        .create_async()
        .await;

    let analysis = static_client(&server)
        .create_analysis(&AnalysisRequest::new("https://example.com".to_string()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(analysis.id, "a1");
    assert_eq!(analysis.status, AnalysisStatus::Pending);
    assert!(analysis.created_at.is_some());
}

#[tokio::test]
async fn quota_envelope_keeps_error_code() {
    let mut server = Server::new_async().await;
    let _quota = server
        .mock("POST", "/api/v1/analyses")
        .with_status(402)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": false,
                "error": { "code": "QUOTA_EXCEEDED", "message": "Monthly quota of 3 analyses exceeded" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = static_client(&server)
        .create_analysis(&AnalysisRequest::new("https://example.com".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.api_code(), Some("QUOTA_EXCEEDED"));
    assert!(matches!(err, LeakDetectorError::ApiError { status_code: 402, .. }));
}

#[tokio::test]
async fn token_is_fetched_for_every_request() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/v1/analyses")
        .match_header("authorization", "Bearer token-1")
        .with_status(201)
        .with_body(analysis_body("a1", "pending"))
        .create_async()
        .await;
    let poll = server
        .mock("GET", "/api/v1/analyses/a1")
        .match_header("authorization", "Bearer token-2")
        .with_status(200)
        .with_body(analysis_body("a1", "processing"))
        .create_async()
        .await;

    let client = client(&server, Arc::new(RotatingTokenProvider::default()));
    client
        .create_analysis(&AnalysisRequest::new("https://example.com".to_string()))
        .await
        .unwrap();
    let analysis = client.get_analysis("a1").await.unwrap();

    create.assert_async().await;
    poll.assert_async().await;
    assert_eq!(analysis.status, AnalysisStatus::Processing);
}

#[tokio::test]
async fn pdf_download_on_free_plan_is_entitlement_error() {
    let mut server = Server::new_async().await;
    let _pdf = server
        .mock("GET", "/api/v1/reports/r1/pdf")
        .with_status(403)
        .with_body(json!({ "success": false, "error": { "code": "FORBIDDEN", "message": "Pro only" } }).to_string())
        .create_async()
        .await;

    let err = static_client(&server).download_report_pdf("r1").await.unwrap_err();

    assert!(matches!(err, LeakDetectorError::EntitlementError { .. }));
}

#[tokio::test]
async fn pdf_download_returns_raw_bytes() {
    let mut server = Server::new_async().await;
    let _pdf = server
        .mock("GET", "/api/v1/reports/r1/pdf")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.7 fake")
        .create_async()
        .await;

    let bytes = static_client(&server).download_report_pdf("r1").await.unwrap();

    assert_eq!(bytes, b"%PDF-1.7 fake");
}

#[tokio::test]
async fn list_reports_passes_paging_and_reads_meta() {
    let mut server = Server::new_async().await;
    let _reports = server
        .mock("GET", "/api/v1/reports")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("offset".into(), "4".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [
                    { "id": "r5", "analysis_id": "a5", "url": "https://a.example", "score": 71, "summary": "ok" },
                    { "id": "r6", "analysis_id": "a6", "url": "https://b.example", "score": 42, "summary": "weak" }
                ],
                "meta": { "limit": 2, "offset": 4, "total": 9 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let page = static_client(&server).list_reports(2, 4).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].score, 42);
    assert!(page.meta.unwrap().has_more());
}

#[tokio::test]
async fn billing_status_decodes_plan() {
    let mut server = Server::new_async().await;
    let _status = server
        .mock("GET", "/api/v1/billing/status")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": { "plan": "free", "analyses_used": 2, "analyses_limit": 3 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let status = static_client(&server).billing_status().await.unwrap();

    assert_eq!(status.plan, Plan::Free);
    assert_eq!(status.remaining(), 1);
}

#[tokio::test]
async fn controller_over_http_resolves_report() {
    let mut server = Server::new_async().await;
    let _create = server
        .mock("POST", "/api/v1/analyses")
        .with_status(201)
        .with_body(analysis_body("a1", "pending"))
        .create_async()
        .await;
    let _poll = server
        .mock("GET", "/api/v1/analyses/a1")
        .with_status(200)
        .with_body(analysis_body("a1", "completed"))
        .create_async()
        .await;
    let _report = server
        .mock("GET", "/api/v1/reports/by-analysis/a1")
        .with_status(200)
        .with_body(json!({ "success": true, "data": { "id": "r1", "score": 80 } }).to_string())
        .create_async()
        .await;

    let backend = Arc::new(static_client(&server));
    let observer = Arc::new(RecordingObserver::default());
    let mut controller = AnalysisController::new(backend, observer.clone(), fast_polling(10));

    let handoff = controller.run("example.com", &CancellationToken::new()).await.unwrap();

    assert_eq!(handoff.report_id, "r1");
    assert_eq!(handoff.report_path(), "/reports/r1");
    assert_eq!(observer.advisory_count(), 0);
}

#[tokio::test]
async fn bad_gateway_polls_raise_advisory_then_time_out() {
    let mut server = Server::new_async().await;
    let _create = server
        .mock("POST", "/api/v1/analyses")
        .with_status(201)
        .with_body(analysis_body("a1", "pending"))
        .create_async()
        .await;
    let polls = server
        .mock("GET", "/api/v1/analyses/a1")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .expect(4)
        .create_async()
        .await;

    let backend = Arc::new(static_client(&server));
    let observer = Arc::new(RecordingObserver::default());
    let mut controller = AnalysisController::new(backend, observer.clone(), fast_polling(4));

    let err = controller.run("example.com", &CancellationToken::new()).await.unwrap_err();

    polls.assert_async().await;
    assert!(matches!(err, LeakDetectorError::Timeout { attempts: 4, .. }));
    assert_eq!(observer.advisory_count(), 1);
}

async fn submission_error_for(status: usize, content_type: &str, body: &str) -> LeakDetectorError {
    let mut server = Server::new_async().await;
    let _create = server
        .mock("POST", "/api/v1/analyses")
        .with_status(status)
        .with_header("content-type", content_type)
        .with_body(body)
        .create_async()
        .await;

    let backend = Arc::new(static_client(&server));
    let observer = Arc::new(RecordingObserver::default());
    let mut controller = AnalysisController::new(backend, observer, fast_polling(4));

    controller.run("example.com", &CancellationToken::new()).await.unwrap_err()
}

#[tokio::test]
async fn html_gateway_page_on_submit_shows_default_message() {
    let err = submission_error_for(502, "text/html", "<html>Bad Gateway</html>").await;

    assert!(matches!(err, LeakDetectorError::SubmissionError { .. }));
    assert_eq!(err.to_string(), SUBMISSION_FAILED_MESSAGE);
}

#[tokio::test]
async fn envelope_without_error_on_submit_shows_default_message() {
    let err = submission_error_for(500, "application/json", r#"{"success":false}"#).await;

    assert_eq!(err.to_string(), SUBMISSION_FAILED_MESSAGE);
}

#[tokio::test]
async fn envelope_error_message_on_submit_is_shown() {
    let body = json!({ "success": false, "error": { "code": "VALIDATION_ERROR", "message": "Internal URLs are not allowed" } });
    let err = submission_error_for(400, "application/json", &body.to_string()).await;

    assert_eq!(err.to_string(), "Internal URLs are not allowed");
}
