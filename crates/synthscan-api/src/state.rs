//! Shared application state.

use std::sync::Arc;

use synthscan_engine::Analyzer;
use synthscan_ml::ModelHandle;

use crate::config::ApiConfig;

/// State shared by all handlers.
///
/// The analyzer detects its optional tools once at startup; the model
/// handle re-checks its artifact on every request.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub analyzer: Arc<Analyzer>,
    pub model: Arc<ModelHandle>,
}

impl AppState {
    /// Create application state from config.
    pub fn new(config: ApiConfig) -> Self {
        let model = Arc::new(ModelHandle::new(&config.model_path));
        Self {
            config,
            analyzer: Arc::new(Analyzer::detect()),
            model,
        }
    }
}
