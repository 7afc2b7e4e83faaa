use thiserror::Error;

/// Composition-layer error categories.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] finview_core::ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
