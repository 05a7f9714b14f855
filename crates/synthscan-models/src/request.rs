//! Analysis request value.

use crate::sensitivity::Sensitivity;

/// One analysis invocation: raw payload plus caller options.
///
/// Created per call and never mutated; the engine only reads from it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Raw video file bytes
    pub payload: Vec<u8>,
    /// Original filename, possibly empty
    pub filename: String,
    /// When set, the size-based contributions are skipped entirely
    pub ignore_size: bool,
    /// Requested detection sensitivity
    pub sensitivity: Sensitivity,
}

impl AnalysisRequest {
    /// Create a request with default options (size considered, medium
    /// sensitivity).
    pub fn new(payload: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            payload,
            filename: filename.into(),
            ignore_size: false,
            sensitivity: Sensitivity::default(),
        }
    }

    /// Set `ignore_size`.
    pub fn with_ignore_size(mut self, ignore_size: bool) -> Self {
        self.ignore_size = ignore_size;
        self
    }

    /// Set the sensitivity level.
    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Payload size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.payload.len()
    }

    /// Payload size in mebibytes (0.0 for an empty payload).
    pub fn size_mb(&self) -> f64 {
        self.payload.len() as f64 / (1024.0 * 1024.0)
    }
}
