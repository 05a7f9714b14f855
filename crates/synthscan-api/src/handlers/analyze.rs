//! Video analysis handler.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use synthscan_models::{
    AnalysisMetrics, AnalysisRequest, Indicator, MlPrediction, Sensitivity,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response for one analysis call: the report plus the thresholded verdict
/// and, when a model artifact exists, the overlay prediction.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub is_ai_generated: bool,
    pub confidence: f64,
    pub indicators: Vec<Indicator>,
    pub size_mb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AnalysisMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml: Option<MlPrediction>,
}

/// Analyze an uploaded video.
///
/// Multipart fields: `video` (the file, required), `ignore_size`,
/// `sensitivity` (`low|medium|high`), `debug_metrics` — the last three are
/// optional boolean-like/enum text fields.
pub async fn analyze_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<AnalyzeResponse>> {
    let mut video: Option<(String, Vec<u8>)> = None;
    let mut ignore_size = false;
    let mut sensitivity = Sensitivity::default();
    let mut debug_metrics = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "video" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
                video = Some((filename, bytes.to_vec()));
            }
            "ignore_size" => ignore_size = parse_bool_field(&text_field(field).await?),
            "sensitivity" => {
                sensitivity = Sensitivity::from_str_lossy(&text_field(field).await?)
            }
            "debug_metrics" => debug_metrics = parse_bool_field(&text_field(field).await?),
            _ => {}
        }
    }

    let (filename, payload) = video.ok_or_else(|| ApiError::bad_request("No video file provided"))?;
    if filename.is_empty() {
        return Err(ApiError::bad_request("No file selected"));
    }

    let request = AnalysisRequest::new(payload, &filename)
        .with_ignore_size(ignore_size)
        .with_sensitivity(sensitivity);

    let report = state.analyzer.analyze(&request).await;
    let ml = state.model.predict(&report.metrics);

    info!(
        filename = %filename,
        size_mb = report.size_mb,
        confidence = report.confidence,
        sensitivity = %sensitivity,
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        is_ai_generated: report.confidence >= sensitivity.decision_threshold(),
        confidence: report.confidence,
        indicators: report.indicators,
        size_mb: report.size_mb,
        metrics: debug_metrics.then_some(report.metrics),
        ml,
    }))
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid form field: {e}")))
}

/// Boolean-like form strings: `1`, `true`, `yes`, `on` (any case).
fn parse_bool_field(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
