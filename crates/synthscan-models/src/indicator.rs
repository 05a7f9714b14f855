//! Fired heuristic indicators.

use serde::{Serialize, Serializer};
use std::fmt;

/// A heuristic that fired during scoring.
///
/// Indicators serialize as tagged strings, some carrying a formatted numeric
/// payload (e.g. `size_contribution:0.134`). Their order in a report follows
/// the accumulator's evaluation order and is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub enum Indicator {
    /// An AI-related keyword appeared in the filename
    AiKeywordsInFilename,
    /// An encoder signature common to AI pipelines appeared in the header
    AiLikeCodecDetected,
    /// The byte-uniqueness proxy fell below threshold
    LowByteUniqueness,
    /// Log-scaled size contribution (value is the scaled weight added)
    SizeContribution(f64),
    /// Longest identical-byte run fraction (value is the raw fraction)
    LongRunFraction(f64),
    /// A known AI tool marker appeared in the header
    MetadataSignature,
    /// Multiple weak signals present at high sensitivity
    HighSensitivityBoost,
    /// Short clip combined with low byte uniqueness
    ShortDurationLowEntropy,
    /// Unusually low bitrate for a small file (value in kbps)
    LowBitrateKbps(f64),
    /// No audio stream in a short (or unprobed) clip
    NoAudioDetected,
    /// Average frame gradient variance below threshold
    FrameSmoothnessLow,
    /// Small file with low uniqueness at medium/high sensitivity
    SmallLowUniquenessBoost,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AiKeywordsInFilename => f.write_str("ai_keywords_in_filename"),
            Self::AiLikeCodecDetected => f.write_str("ai_like_codec_detected"),
            Self::LowByteUniqueness => f.write_str("low_byte_uniqueness"),
            Self::SizeContribution(v) => write!(f, "size_contribution:{v:.3}"),
            Self::LongRunFraction(v) => write!(f, "long_run_fraction:{v:.3}"),
            Self::MetadataSignature => f.write_str("metadata_signature"),
            Self::HighSensitivityBoost => f.write_str("high_sensitivity_boost"),
            Self::ShortDurationLowEntropy => f.write_str("short_duration_low_entropy"),
            Self::LowBitrateKbps(v) => write!(f, "low_bitrate_kbps:{v:.1}"),
            Self::NoAudioDetected => f.write_str("no_audio_detected"),
            Self::FrameSmoothnessLow => f.write_str("frame_smoothness_low"),
            Self::SmallLowUniquenessBoost => f.write_str("small_low_uniqueness_boost"),
        }
    }
}

impl Serialize for Indicator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Indicator {
    /// The tag part of the indicator string, without any numeric payload.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AiKeywordsInFilename => "ai_keywords_in_filename",
            Self::AiLikeCodecDetected => "ai_like_codec_detected",
            Self::LowByteUniqueness => "low_byte_uniqueness",
            Self::SizeContribution(_) => "size_contribution",
            Self::LongRunFraction(_) => "long_run_fraction",
            Self::MetadataSignature => "metadata_signature",
            Self::HighSensitivityBoost => "high_sensitivity_boost",
            Self::ShortDurationLowEntropy => "short_duration_low_entropy",
            Self::LowBitrateKbps(_) => "low_bitrate_kbps",
            Self::NoAudioDetected => "no_audio_detected",
            Self::FrameSmoothnessLow => "frame_smoothness_low",
            Self::SmallLowUniquenessBoost => "small_low_uniqueness_boost",
        }
    }
}
