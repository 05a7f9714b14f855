//! Score accumulation.
//!
//! Weighted contributions accumulate additively into an unbounded raw score
//! which is clamped to [0, 1] only at the end. The unclamped value surfaces
//! in `metrics.raw_score`; clamping per contribution would change that
//! diagnostic, so the late clamp is part of the contract.
//!
//! Two boost rows (the flat high-sensitivity boost and the scaled small
//! low-uniqueness boost) overlap in their trigger conditions with base rows.
//! The overlap is preserved as specified rather than deduplicated.

use synthscan_models::{
    round_to, AnalysisMetrics, AnalysisReport, AnalysisRequest, Indicator, ProbeSignals,
    Sensitivity,
};

use crate::bytestats::ByteSignals;
use crate::matcher::NameSignals;

/// Fold all extracted signals into the final report.
///
/// Contributions are evaluated in a fixed order; the indicator list follows
/// that order and is reproducible for identical inputs.
pub fn accumulate(
    request: &AnalysisRequest,
    byte: ByteSignals,
    name: NameSignals,
    probe: ProbeSignals,
    frame_blur_avg: Option<f64>,
) -> AnalysisReport {
    let profile = request.sensitivity.profile();
    let m = profile.multiplier;
    let size_mb = request.size_mb();

    let mut score = 0.0;
    let mut indicators = Vec::new();

    if name.has_ai_keywords {
        score += 0.35 * m;
        indicators.push(Indicator::AiKeywordsInFilename);
    }

    if name.has_ai_codec {
        score += 0.25 * m;
        indicators.push(Indicator::AiLikeCodecDetected);
    }

    if byte.file_entropy < 0.3 {
        score += 0.20 * m;
        indicators.push(Indicator::LowByteUniqueness);
    }

    // Log scale keeps very large files from dominating the score
    let mut size_contrib = 0.0;
    if !request.ignore_size && size_mb > 0.0 {
        size_contrib = ((size_mb + 1.0).log10() / 2.5).min(0.2) * m;
        score += size_contrib;
        indicators.push(Indicator::SizeContribution(size_contrib));
    }

    if byte.run_fraction > 0.05 {
        score += 0.12 * m;
        indicators.push(Indicator::LongRunFraction(byte.run_fraction));
    }

    if name.has_metadata_signature {
        score += 0.18 * m;
        indicators.push(Indicator::MetadataSignature);
    }

    // Flat boost, deliberately not sensitivity-scaled
    if profile.multi_signal_boost {
        let weak_signals = [
            name.has_ai_keywords,
            name.has_ai_codec,
            byte.file_entropy < 0.35,
            byte.run_fraction > 0.03,
            name.has_metadata_signature,
        ]
        .iter()
        .filter(|&&fired| fired)
        .count();
        if weak_signals >= 2 {
            score += 0.25;
            indicators.push(Indicator::HighSensitivityBoost);
        }
    }

    // Duration rows require a positive probed duration
    let duration = probe.duration.filter(|d| *d > 0.0);
    if let Some(d) = duration {
        if d < 8.0 && byte.file_entropy < 0.34 {
            score += 0.12 * m;
            indicators.push(Indicator::ShortDurationLowEntropy);
        }
    }

    // Prefer the probed bitrate, fall back to size over duration
    let bitrate_kbps = probe
        .bitrate
        .filter(|b| *b > 0.0)
        .map(|b| b / 1000.0)
        .or_else(|| duration.map(|d| (request.size_bytes() as f64 * 8.0) / d / 1000.0));
    if let Some(kbps) = bitrate_kbps {
        if kbps < 200.0 && size_mb < 5.0 {
            score += 0.08 * m;
            indicators.push(Indicator::LowBitrateKbps(kbps));
        }
    }

    if probe.has_audio == Some(false) && duration.map_or(true, |d| d < 30.0) {
        score += 0.06 * m;
        indicators.push(Indicator::NoAudioDetected);
    }

    if let Some(avg) = frame_blur_avg {
        if avg < 10.0 {
            score += 0.12 * m;
            indicators.push(Indicator::FrameSmoothnessLow);
        }
    }

    if !request.ignore_size
        && (0.7..=3.0).contains(&size_mb)
        && byte.file_entropy < 0.36
        && matches!(
            request.sensitivity,
            Sensitivity::Medium | Sensitivity::High
        )
    {
        score += 0.20 * m;
        indicators.push(Indicator::SmallLowUniquenessBoost);
    }

    let confidence = score.clamp(0.0, 1.0);

    let metrics = AnalysisMetrics {
        size_mb: round_to(size_mb, 3),
        file_entropy: round_to(byte.file_entropy, 3),
        has_ai_keywords: name.has_ai_keywords,
        has_ai_codec: name.has_ai_codec,
        run_frac: round_to(byte.run_fraction, 4),
        size_contrib: round_to(size_contrib, 4),
        raw_score: round_to(score, 4),
        frame_blur_avg: frame_blur_avg.map(|v| round_to(v, 3)),
    };

    AnalysisReport {
        confidence: round_to(confidence, 3),
        indicators,
        size_mb: round_to(size_mb, 2),
        metrics,
    }
}
