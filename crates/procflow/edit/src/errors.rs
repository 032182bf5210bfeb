//! Error types for edit operations

use procflow_types::{ModelError, NodeId};

/// Errors raised while applying edit operations
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Transition not found: {from} -> {to}")]
    TransitionNotFound { from: NodeId, to: NodeId },

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Result type alias for edit operations
pub type EditResult<T> = Result<T, EditError>;
