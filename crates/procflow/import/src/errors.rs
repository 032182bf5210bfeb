//! Error types for format detection and parsing

use procflow_types::ModelError;

/// Errors raised while parsing a workflow dialect.
///
/// Every parser failure is one of these variants; the pipeline catches
/// them at a single boundary and normalizes them into the result
/// envelope, so callers never see an unwound panic or a partial model.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(
        "Free-text input is not parsed by this core; route it to the language-model collaborator"
    )]
    FreeTextUnsupported,

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Canonical payload is missing the required '{0}' array")]
    MissingArray(&'static str),

    #[error("Malformed XML: {0}")]
    MalformedXml(#[from] roxmltree::Error),

    #[error("No <{0}> element found in document")]
    MissingElement(&'static str),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Result type alias for parser operations
pub type ImportResult<T> = Result<T, ImportError>;
