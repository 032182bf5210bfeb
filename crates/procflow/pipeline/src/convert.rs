//! The orchestrator: detect → parse → validate → layout → envelope

use crate::validate::validate;
use procflow_import::{detect, SourceFormat};
use procflow_layout::{layout_with, Direction, LayeredBackend, LayoutBackend};
use procflow_types::BusinessProcess;
use serde::Serialize;
use tracing::{debug, warn};

/// The single result envelope every conversion returns.
///
/// `format` always carries the detected tag, on failure too, so a
/// caller can route free-text input to the language-model collaborator
/// instead of retrying.
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<BusinessProcess>,
    pub format: SourceFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Convert raw text with the intrinsic layout backend, top-down
pub fn convert(input: &str) -> Conversion {
    convert_with(input, Direction::TopDown, &LayeredBackend)
}

/// Convert raw text with an explicit direction and layout backend
pub fn convert_with(
    input: &str,
    direction: Direction,
    backend: &dyn LayoutBackend,
) -> Conversion {
    let format = detect(input);
    debug!(%format, bytes = input.len(), "detected input format");

    match procflow_import::parse(input, format) {
        Ok(mut workflow) => {
            let warnings = validate(&workflow);
            for warning in &warnings {
                debug!(%warning, "validation advisory");
            }
            layout_with(backend, &mut workflow, direction);
            Conversion {
                success: true,
                workflow: Some(workflow),
                format,
                error: None,
                warnings,
            }
        }
        Err(err) => {
            warn!(%format, error = %err, "conversion failed");
            Conversion {
                success: false,
                workflow: None,
                format,
                error: Some(err.to_string()),
                warnings: Vec::new(),
            }
        }
    }
}
