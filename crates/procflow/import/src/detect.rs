//! Format detector: classifies raw text into a closed set of dialect tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of input dialects the core understands.
///
/// `FreeText` is a real member of the set — it tags input that only the
/// external language-model collaborator can interpret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    #[serde(rename = "canonical-json")]
    CanonicalJson,
    #[serde(rename = "state-machine-markup")]
    StateMachineXml,
    #[serde(rename = "structured-process-markup")]
    ProcessXml,
    #[serde(rename = "flow-text")]
    FlowText,
    #[serde(rename = "free-text")]
    FreeText,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SourceFormat::CanonicalJson => "canonical-json",
            SourceFormat::StateMachineXml => "state-machine-markup",
            SourceFormat::ProcessXml => "structured-process-markup",
            SourceFormat::FlowText => "flow-text",
            SourceFormat::FreeText => "free-text",
        };
        write!(f, "{tag}")
    }
}

/// Diagram header keywords that open a flow-text document
const FLOW_HEADERS: [&str; 3] = ["graph", "flowchart", "stateDiagram"];

/// Classify raw text. Pure and deterministic; ambiguous input is not an
/// error, it simply defaults to `FreeText`.
pub fn detect(input: &str) -> SourceFormat {
    // 1. Structural JSON parse wins outright.
    if serde_json::from_str::<serde_json::Value>(input).is_ok() {
        return SourceFormat::CanonicalJson;
    }

    // 2. XML prolog or opening tag: inspect for dialect markers.
    let trimmed = input.trim_start();
    if trimmed.starts_with("<?xml") || trimmed.starts_with('<') {
        if input.contains("StateMachine") || input.contains("statemachine") {
            return SourceFormat::StateMachineXml;
        }
        if has_process_markup_marker(input) {
            return SourceFormat::ProcessXml;
        }
        // XML-looking text matching neither dialect falls through.
    }

    // 3. Flow-text opens with a known diagram keyword.
    if let Some(first_line) = input.lines().find(|l| !l.trim().is_empty()) {
        let first_word = first_line.trim().split_whitespace().next().unwrap_or("");
        if FLOW_HEADERS.iter().any(|kw| first_word.starts_with(kw)) {
            return SourceFormat::FlowText;
        }
    }

    // 4. Everything else is the collaborator's problem.
    SourceFormat::FreeText
}

/// A `definitions` or `process` element, with or without a namespace prefix
fn has_process_markup_marker(input: &str) -> bool {
    ["definitions", "process"].iter().any(|name| {
        input.contains(&format!("<{name}")) || input.contains(&format!(":{name}"))
    })
}
