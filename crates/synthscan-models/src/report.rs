//! Analysis report value.

use serde::Serialize;

use crate::indicator::Indicator;
use crate::metrics::AnalysisMetrics;

/// Result of one analysis call.
///
/// Immutable once produced. `confidence` is clamped to [0, 1] regardless of
/// how large the intermediate raw score grew; the unclamped value is exposed
/// in `metrics.raw_score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Confidence the payload is AI-generated, in [0, 1], rounded to 3
    /// decimals
    pub confidence: f64,
    /// Heuristics that fired, in evaluation order
    pub indicators: Vec<Indicator>,
    /// Payload size in MB, rounded to 2 decimals
    pub size_mb: f64,
    /// Raw diagnostic values
    pub metrics: AnalysisMetrics,
}

impl AnalysisReport {
    /// Whether a given indicator tag fired.
    pub fn has_indicator(&self, tag: &str) -> bool {
        self.indicators.iter().any(|i| i.tag() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_indicator() {
        let report = AnalysisReport {
            confidence: 0.5,
            indicators: vec![
                Indicator::AiKeywordsInFilename,
                Indicator::SizeContribution(0.1),
            ],
            size_mb: 1.0,
            metrics: AnalysisMetrics::default(),
        };
        assert!(report.has_indicator("ai_keywords_in_filename"));
        assert!(report.has_indicator("size_contribution"));
        assert!(!report.has_indicator("metadata_signature"));
    }
}
