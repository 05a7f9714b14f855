//! Metric-to-feature projection.

use synthscan_models::AnalysisMetrics;

/// Number of model features.
pub const FEATURE_COUNT: usize = 5;

/// Project metrics to the model's fixed-order feature vector:
/// `file_entropy, size_mb, run_frac, size_contrib, frame_blur_avg`.
/// A missing blur score defaults to 0.0.
pub fn feature_vector(metrics: &AnalysisMetrics) -> [f64; FEATURE_COUNT] {
    [
        metrics.file_entropy,
        metrics.size_mb,
        metrics.run_frac,
        metrics.size_contrib,
        metrics.frame_blur_avg.unwrap_or(0.0),
    ]
}
