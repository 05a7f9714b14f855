//! Persisted model artifact handling.

use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::features::{feature_vector, FEATURE_COUNT};
use synthscan_models::{AnalysisMetrics, MlPrediction};

/// Logistic model persisted as a JSON artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// One weight per feature, in feature-vector order
    pub weights: [f64; FEATURE_COUNT],
    /// Intercept
    pub bias: f64,
}

impl LinearModel {
    /// Probability that the metrics describe an AI-generated video.
    pub fn probability(&self, metrics: &AnalysisMetrics) -> f64 {
        let x = feature_vector(metrics);
        let z: f64 = self
            .weights
            .iter()
            .zip(x.iter())
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.bias;
        1.0 / (1.0 + (-z).exp())
    }
}

/// Handle to an on-disk model artifact.
///
/// The artifact is re-checked for existence on every call and the parsed
/// model is cached keyed by file modification time, so a newly trained
/// artifact is picked up without a process restart. A missing or unreadable
/// artifact yields `None`, never an error.
pub struct ModelHandle {
    path: PathBuf,
    cached: RwLock<Option<(SystemTime, LinearModel)>>,
}

impl ModelHandle {
    /// Create a handle for the given artifact path. The file does not need
    /// to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    /// Artifact path this handle watches.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Predict from analyzer metrics, or `None` when no usable artifact
    /// exists.
    pub fn predict(&self, metrics: &AnalysisMetrics) -> Option<MlPrediction> {
        let model = self.load()?;
        let prob = model.probability(metrics);
        Some(MlPrediction {
            ml_pred: prob >= 0.5,
            ml_prob: Some(prob),
        })
    }

    fn load(&self) -> Option<LinearModel> {
        let mtime = std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .ok()?;

        {
            let cached = self.cached.read().unwrap_or_else(|e| e.into_inner());
            if let Some((cached_mtime, model)) = cached.as_ref() {
                if *cached_mtime == mtime {
                    return Some(model.clone());
                }
            }
        }

        let model = match self.parse_artifact() {
            Ok(model) => model,
            Err(e) => {
                warn!("model artifact at {} unusable: {}", self.path.display(), e);
                return None;
            }
        };

        debug!("loaded model artifact from {}", self.path.display());
        let mut cached = self.cached.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some((mtime, model.clone()));
        Some(model)
    }

    fn parse_artifact(&self) -> Result<LinearModel, MlArtifactError> {
        let raw = std::fs::read(&self.path)?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

/// Why an artifact could not be used. Internal: callers only see `None`.
#[derive(Debug, thiserror::Error)]
enum MlArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
