//! Error types for the canonical model

use crate::NodeId;

/// Errors raised while building or (de)serializing the model
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Duplicate node ID: {0}")]
    DuplicateNode(NodeId),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
