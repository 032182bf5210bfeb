//! State-machine markup parser
//!
//! Ingests an XML dialect with a root `StateMachine` element, an
//! `initial` designation, and `State` elements keyed by a reference id
//! with a display name. Each state declares nested `Transition`
//! elements whose target is either an inline `{reference <id>}`
//! attribute value or a nested `TargetState` child.
//!
//! Structural nesting can repeat a state; the first occurrence wins.
//! Output node order is depth-first discovery from the initial state
//! (a natural top-to-bottom reading order the layout engine uses as a
//! tie-breaker), with unreached states appended in document order.

use crate::{code_from_name, short_id, ImportError, ImportResult};
use procflow_types::{BusinessProcess, NodeType, ProcessNode, ProcessTransition};
use roxmltree::{Document, Node};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Display-name keywords marking a terminal state
const END_KEYWORDS: [&str; 4] = ["closed", "end", "done", "结束"];
/// Display-name keywords marking a decision point
const GATEWAY_KEYWORDS: [&str; 4] = ["check", "gateway", "decision", "审核"];
/// Action keywords a long condition expression may reduce to
const ACTION_KEYWORDS: [&str; 5] = ["agree", "reject", "submit", "cancel", "complete"];

/// Conditions longer than this are reduced or truncated
const MAX_LABEL_LEN: usize = 24;
const TRUNCATED_LEN: usize = 12;

struct RawTransition {
    target: Option<String>,
    label: Option<String>,
    condition: Option<String>,
}

struct RawState {
    id: String,
    name: String,
    transitions: Vec<RawTransition>,
}

pub fn parse(input: &str) -> ImportResult<BusinessProcess> {
    let doc = Document::parse(input)?;
    let root = doc
        .descendants()
        .find(|n| n.tag_name().name() == "StateMachine")
        .ok_or(ImportError::MissingElement("StateMachine"))?;

    let machine_name = root.attribute("name").unwrap_or("State machine").to_string();
    let initial = root
        .attribute("initial")
        .or_else(|| root.attribute("initialState"))
        .map(str::to_string);

    // Collect states, first occurrence wins on nested duplicates.
    let mut order: Vec<String> = Vec::new();
    let mut states: HashMap<String, RawState> = HashMap::new();
    for element in root.descendants().filter(|n| n.tag_name().name() == "State") {
        let Some(ref_id) = element.attribute("refId").or_else(|| element.attribute("id")) else {
            warn!("state element without a reference id, skipping");
            continue;
        };
        if states.contains_key(ref_id) {
            continue;
        }
        let display = element.attribute("name").unwrap_or(ref_id).to_string();
        order.push(ref_id.to_string());
        states.insert(
            ref_id.to_string(),
            RawState {
                id: ref_id.to_string(),
                name: display,
                transitions: extract_transitions(&element),
            },
        );
    }

    // Depth-first discovery from the initial state, then leftovers in
    // document order.
    let mut visit_order: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    if let Some(start) = initial.as_deref().filter(|id| states.contains_key(*id)) {
        let mut stack = vec![start.to_string()];
        while let Some(id) = stack.pop() {
            if !seen.insert(id.clone()) {
                continue;
            }
            visit_order.push(id.clone());
            if let Some(state) = states.get(&id) {
                // Reverse keeps the first declared transition first out
                // of the stack.
                for t in state.transitions.iter().rev() {
                    if let Some(target) = &t.target {
                        if states.contains_key(target) && !seen.contains(target) {
                            stack.push(target.clone());
                        }
                    }
                }
            }
        }
    }
    for id in &order {
        if !seen.contains(id) {
            visit_order.push(id.clone());
        }
    }

    let mut process = BusinessProcess::new(
        short_id(),
        machine_name.clone(),
        code_from_name(&machine_name),
    );

    for id in &visit_order {
        let state = &states[id];
        let node_type = classify(state, initial.as_deref());
        process.add_node(ProcessNode::new(
            state.id.clone(),
            state.name.clone(),
            node_type,
        ))?;
    }

    let mut seq = 0usize;
    for id in &visit_order {
        for t in &states[id].transitions {
            let Some(target) = &t.target else {
                warn!(state = %id, "transition without a resolvable target, skipping");
                continue;
            };
            seq += 1;
            let mut transition =
                ProcessTransition::new(format!("t{seq}"), id.clone(), target.clone());
            transition.label = t
                .label
                .as_deref()
                .or(t.condition.as_deref())
                .map(clean_label);
            transition.condition = t.condition.clone();
            process.add_transition(transition);
        }
    }

    Ok(process)
}

fn extract_transitions(state: &Node<'_, '_>) -> Vec<RawTransition> {
    state
        .children()
        .filter(|n| n.tag_name().name() == "Transition")
        .map(|t| RawTransition {
            target: resolve_target(&t),
            label: t
                .attribute("event")
                .or_else(|| t.attribute("name"))
                .map(str::to_string),
            condition: t
                .attribute("condition")
                .or_else(|| t.attribute("cond"))
                .map(str::to_string),
        })
        .collect()
}

/// Target reference: inline `{reference <id>}` attribute value, a plain
/// attribute value, or a nested `TargetState` child.
fn resolve_target(transition: &Node<'_, '_>) -> Option<String> {
    if let Some(raw) = transition.attribute("to").or_else(|| transition.attribute("target")) {
        return Some(parse_reference(raw));
    }
    transition
        .children()
        .find(|n| n.tag_name().name() == "TargetState")
        .and_then(|t| {
            t.attribute("refId")
                .or_else(|| t.attribute("id"))
                .map(str::to_string)
                .or_else(|| t.text().map(|s| s.trim().to_string()))
        })
        .filter(|s| !s.is_empty())
}

/// `{reference approved}` ⇒ `approved`; anything else passes through
fn parse_reference(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(inner) = trimmed.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        if let Some(id) = inner.trim().strip_prefix("reference") {
            return id.trim().to_string();
        }
    }
    trimmed.to_string()
}

fn classify(state: &RawState, initial: Option<&str>) -> NodeType {
    if initial == Some(state.id.as_str()) {
        return NodeType::Start;
    }
    let lowered = state.name.to_lowercase();
    if END_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return NodeType::End;
    }
    if GATEWAY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return NodeType::Gateway;
    }
    NodeType::Task
}

/// Strip the `flow_` prefix token, decode residual character entities,
/// and shorten long condition expressions to an embedded action keyword
/// or an ellipsis-truncated prefix.
fn clean_label(raw: &str) -> String {
    let stripped = raw.strip_prefix("flow_").unwrap_or(raw);
    let decoded = decode_entities(stripped);
    if decoded.chars().count() <= MAX_LABEL_LEN {
        return decoded;
    }
    let lowered = decoded.to_lowercase();
    if let Some(keyword) = ACTION_KEYWORDS.iter().find(|k| lowered.contains(*k)) {
        return (*keyword).to_string();
    }
    let prefix: String = decoded.chars().take(TRUNCATED_LEN).collect();
    format!("{prefix}…")
}

/// Attribute values reach us entity-decoded already, but conditions
/// copied out of double-escaped documents still carry `&amp;`-style
/// escapes.
fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
