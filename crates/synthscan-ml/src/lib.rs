//! Optional learned-model overlay.
//!
//! Projects the analyzer's diagnostic metrics to a fixed-order feature
//! vector and, when a persisted model artifact exists, returns a
//! supplementary prediction. The overlay never modifies the heuristic
//! confidence, and an absent artifact is a supported state, not an error.

pub mod features;
pub mod model;

pub use features::{feature_vector, FEATURE_COUNT};
pub use model::{LinearModel, ModelHandle};
