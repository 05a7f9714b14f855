//! API integration tests.
//!
//! These run the real router with null media tools, so they hold on hosts
//! without ffmpeg/ffprobe installed.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use synthscan_api::{create_router, ApiConfig, AppState};
use synthscan_engine::Analyzer;
use synthscan_media::{NullFrameSampler, NullProber};
use synthscan_ml::ModelHandle;

const BOUNDARY: &str = "synthscan-test-boundary";

fn test_app() -> Router {
    let config = ApiConfig::default();
    let model = Arc::new(ModelHandle::new("missing-model.json"));
    let state = AppState {
        config,
        analyzer: Arc::new(Analyzer::with_tools(
            Box::new(NullProber),
            Box::new(NullFrameSampler),
        )),
        model,
    };
    create_router(state)
}

/// Build a multipart/form-data body. A part with a filename becomes a file
/// field, one without becomes a text field.
fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Body {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match filename {
            Some(f) => format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\r\n"
            ),
            None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

fn analyze_request(body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(body)
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_analyze_without_video_field_is_rejected() {
    let body = multipart_body(&[("ignore_size", None, b"1")]);
    let response = test_app().oneshot(analyze_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "No video file provided");
}

#[tokio::test]
async fn test_analyze_with_empty_filename_is_rejected() {
    let body = multipart_body(&[("video", Some(""), b"not a real video")]);
    let response = test_app().oneshot(analyze_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "No file selected");
}

#[tokio::test]
async fn test_analyze_omits_metrics_and_ml_by_default() {
    let payload = vec![0x42u8; 4096];
    let body = multipart_body(&[("video", Some("clip.mp4"), &payload)]);
    let response = test_app().oneshot(analyze_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert!(json["is_ai_generated"].is_boolean());
    let confidence = json["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
    assert!(json["indicators"].is_array());
    // No debug_metrics field and no model artifact: both keys stay off the wire
    assert!(json.get("metrics").is_none());
    assert!(json.get("ml").is_none());
}

#[tokio::test]
async fn test_analyze_returns_metrics_when_requested() {
    let payload = vec![0x42u8; 4096];
    let body = multipart_body(&[
        ("video", Some("clip.mp4"), payload.as_slice()),
        ("debug_metrics", None, b"true"),
        ("sensitivity", None, b"high"),
    ]);
    let response = test_app().oneshot(analyze_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let metrics = &json["metrics"];
    assert!(metrics["raw_score"].is_number());
    assert!(metrics["file_entropy"].is_number());
}
