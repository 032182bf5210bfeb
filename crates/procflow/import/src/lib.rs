//! Format detection and parsing for procflow
//!
//! Workflow definitions arrive in several incompatible textual dialects.
//! This crate classifies raw text into a closed set of format tags and
//! converts each supported dialect into the canonical
//! [`BusinessProcess`](procflow_types::BusinessProcess) model:
//!
//! - **canonical-json** — the model's own JSON shape, bare or wrapped
//!   in a `{type, data}` envelope.
//! - **state-machine-markup** — an XML dialect of named states with
//!   nested transitions and reference-attribute targets.
//! - **structured-process-markup** — an XML dialect of start/end
//!   events, tasks, gateways, and sequence flows (namespace prefixes
//!   optional).
//! - **flow-text** — a line-oriented diagram mini-language
//!   (`graph`/`flowchart` header, `A[Label]`, `A --> B`).
//! - **free-text** — everything else; explicitly not parsed here but
//!   routed to the external language-model collaborator.
//!
//! Every parser either returns a complete model with all positions at
//! the origin (pending layout) or a typed [`ImportError`]. Partial
//! models are never produced.

#![deny(unsafe_code)]

mod canonical;
mod detect;
mod errors;
mod flow_text;
mod process_xml;
mod state_machine;

pub use detect::{detect, SourceFormat};
pub use errors::{ImportError, ImportResult};

use procflow_types::BusinessProcess;
use uuid::Uuid;

/// Parse raw text already classified as `format`.
///
/// The dispatch is an exhaustive match over the closed format set, so
/// adding a dialect is a compile-checked change.
pub fn parse(input: &str, format: SourceFormat) -> ImportResult<BusinessProcess> {
    match format {
        SourceFormat::CanonicalJson => canonical::parse(input),
        SourceFormat::StateMachineXml => state_machine::parse(input),
        SourceFormat::ProcessXml => process_xml::parse(input),
        SourceFormat::FlowText => flow_text::parse(input),
        SourceFormat::FreeText => Err(ImportError::FreeTextUnsupported),
    }
}

/// Detect the format and parse in one step
pub fn parse_any(input: &str) -> ImportResult<BusinessProcess> {
    parse(input, detect(input))
}

/// Short random identifier for synthesized ids
pub(crate) fn short_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

/// Derive a stable-looking business code from a display name
pub(crate) fn code_from_name(name: &str) -> String {
    let code: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if code.chars().all(|c| c == '_') {
        format!("PROC_{}", short_id().to_uppercase())
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_dispatch_is_typed_failure() {
        let result = parse("please build me an approval flow", SourceFormat::FreeText);
        assert!(matches!(result, Err(ImportError::FreeTextUnsupported)));
    }

    #[test]
    fn test_parse_any_routes_flow_text() {
        let process = parse_any("flowchart TD\nA[One]-->B[Two]\n").unwrap();
        assert_eq!(process.node_count(), 2);
    }

    #[test]
    fn test_code_from_name() {
        assert_eq!(code_from_name("Document Review"), "DOCUMENT_REVIEW");
        assert!(code_from_name("---").starts_with("PROC_"));
    }
}
