//! Raw diagnostic metrics attached to a report.

use serde::{Deserialize, Serialize};

/// Diagnostic values computed during scoring.
///
/// Serialized as a flat JSON object. `raw_score` is the unclamped
/// accumulator value and, unlike `confidence`, is not bounded; it exists for
/// debugging and must not be interpreted as a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisMetrics {
    /// Payload size in MB, rounded to 3 decimals
    pub size_mb: f64,
    /// Byte-uniqueness proxy over the sample window, rounded to 3 decimals
    pub file_entropy: f64,
    /// Whether an AI keyword matched the filename
    pub has_ai_keywords: bool,
    /// Whether an encoder signature matched the header
    pub has_ai_codec: bool,
    /// Longest-run fraction over the sample window, rounded to 4 decimals
    pub run_frac: f64,
    /// Sensitivity-scaled size contribution, rounded to 4 decimals
    pub size_contrib: f64,
    /// Unclamped accumulator score, rounded to 4 decimals
    pub raw_score: f64,
    /// Mean per-frame blur score, rounded to 3 decimals; absent when no
    /// frame could be sampled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_blur_avg: Option<f64>,
}
