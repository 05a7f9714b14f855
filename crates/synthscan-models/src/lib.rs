//! Shared data models for the SynthScan analyzer.
//!
//! This crate provides Serde-serializable types for:
//! - Analysis requests and sensitivity levels
//! - Fired heuristic indicators
//! - Analysis reports and diagnostic metrics
//! - Container probe signals
//! - Learned-model overlay predictions

pub mod indicator;
pub mod metrics;
pub mod report;
pub mod request;
pub mod sensitivity;
pub mod signals;

// Re-export common types
pub use indicator::Indicator;
pub use metrics::AnalysisMetrics;
pub use report::AnalysisReport;
pub use request::AnalysisRequest;
pub use sensitivity::{Sensitivity, SensitivityProfile};
pub use signals::{MlPrediction, ProbeSignals};

/// Round a value to `digits` decimal places.
///
/// Report fields are rounded for stable wire output (confidence to 3,
/// run fraction to 4, and so on).
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
