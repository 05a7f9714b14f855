//! Sensitivity levels and derived scoring profiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Detection sensitivity requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    /// Conservative scoring (signal contributions scaled down)
    Low,
    /// Default scoring
    #[default]
    Medium,
    /// Aggressive scoring, with an extra multi-signal boost rule
    High,
}

/// Error for unrecognized sensitivity strings.
#[derive(Debug, Error)]
#[error("invalid sensitivity: {0}")]
pub struct SensitivityParseError(pub String);

impl Sensitivity {
    /// Returns the level as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a user-supplied string, falling back to `Medium` for anything
    /// unrecognized. Uploads carry sensitivity as a free-form form field, so
    /// the permissive parse is part of the endpoint contract.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Confidence threshold above which a video is reported as AI-generated.
    pub fn decision_threshold(&self) -> f64 {
        match self {
            Self::High => 0.45,
            _ => 0.60,
        }
    }

    /// Derived scoring profile for this level.
    pub fn profile(&self) -> SensitivityProfile {
        match self {
            Self::Low => SensitivityProfile {
                multiplier: 0.8,
                multi_signal_boost: false,
            },
            Self::Medium => SensitivityProfile {
                multiplier: 1.0,
                multi_signal_boost: false,
            },
            Self::High => SensitivityProfile {
                multiplier: 1.3,
                multi_signal_boost: true,
            },
        }
    }
}

impl FromStr for Sensitivity {
    type Err = SensitivityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(SensitivityParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring constants derived from a sensitivity level.
///
/// `multiplier` scales most signal contributions. `multi_signal_boost`
/// enables the flat (unscaled) boost applied when several weak signals
/// fire together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityProfile {
    pub multiplier: f64,
    pub multi_signal_boost: bool,
}
