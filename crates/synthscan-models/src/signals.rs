//! Signals produced by the optional extractors.

use serde::{Deserialize, Serialize};

/// Facts recovered by the container prober.
///
/// Every field is optional: an empty value is the supported degraded mode
/// when the probing tool is missing, fails, or times out. Presence itself is
/// meaningful — duration- and audio-dependent heuristics only fire when the
/// corresponding field is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProbeSignals {
    /// Container duration in seconds
    pub duration: Option<f64>,
    /// Container bitrate in bits/second
    pub bitrate: Option<f64>,
    /// Whether any stream is audio-typed
    pub has_audio: Option<bool>,
}

impl ProbeSignals {
    /// True when no field was recovered.
    pub fn is_empty(&self) -> bool {
        self.duration.is_none() && self.bitrate.is_none() && self.has_audio.is_none()
    }
}

/// Supplementary prediction from the learned-model overlay.
///
/// Never overrides the heuristic confidence; omitted from responses when no
/// model artifact is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    /// Model's binary verdict
    pub ml_pred: bool,
    /// Model's probability, when the model exposes one
    pub ml_prob: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_probe_signals() {
        assert!(ProbeSignals::default().is_empty());
        let probed = ProbeSignals {
            duration: Some(5.0),
            ..Default::default()
        };
        assert!(!probed.is_empty());
    }
}
