//! Canonical JSON parser: the model's own shape, bare or enveloped
//!
//! Accepts either the bare `{id, name, code, nodes, transitions}` form
//! or the artifact envelope `{type: "process", data: {...}}`. The node
//! and transition arrays are required; everything else is normalized —
//! `source`/`target` aliases, missing ids, missing node types.

use crate::{code_from_name, short_id, ImportError, ImportResult};
use procflow_types::{
    BusinessProcess, NodeType, Position, ProcessNode, ProcessTransition,
};
use serde_json::Value;
use tracing::warn;

pub fn parse(input: &str) -> ImportResult<BusinessProcess> {
    let value: Value = serde_json::from_str(input)?;

    // Unwrap the {type, data} artifact envelope when present.
    let payload = match (value.get("type"), value.get("data")) {
        (Some(_), Some(data)) => data,
        _ => &value,
    };

    let raw_nodes = payload
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingArray("nodes"))?;
    let raw_transitions = payload
        .get("transitions")
        .or_else(|| payload.get("edges"))
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingArray("transitions"))?;

    let name = str_field(payload, "name").unwrap_or_else(|| "Imported process".to_string());
    let code = str_field(payload, "code").unwrap_or_else(|| code_from_name(&name));
    let id = str_field(payload, "id").unwrap_or_else(short_id);
    let mut process = BusinessProcess::new(id, name, code);
    process.description = str_field(payload, "description");

    for raw in raw_nodes {
        let node = normalize_node(raw);
        if process.contains_node(&node.id) {
            warn!(node_id = %node.id, "duplicate node id in canonical payload, keeping first");
            continue;
        }
        process.add_node(node)?;
    }

    for raw in raw_transitions {
        process.add_transition(normalize_transition(raw));
    }

    Ok(process)
}

fn normalize_node(raw: &Value) -> ProcessNode {
    let id = str_field(raw, "id").unwrap_or_else(|| format!("node_{}", short_id()));
    let name = str_field(raw, "name").unwrap_or_else(|| id.clone());

    let node_type = match raw.get("type") {
        Some(v) => serde_json::from_value::<NodeType>(v.clone()).unwrap_or_else(|_| {
            warn!(value = %v, "unrecognized node type, defaulting to task");
            NodeType::Task
        }),
        None => NodeType::Task,
    };

    let mut node = ProcessNode::new(id, name, node_type);
    node.description = str_field(raw, "description");
    node.assignee = str_field(raw, "assignee");
    node.form_ref = str_field(raw, "formRef");
    node.position = raw
        .get("position")
        .and_then(|p| {
            Some(Position::new(
                p.get("x")?.as_f64()?,
                p.get("y")?.as_f64()?,
            ))
        })
        .unwrap_or(Position::ORIGIN);
    node
}

fn normalize_transition(raw: &Value) -> ProcessTransition {
    let id = str_field(raw, "id").unwrap_or_else(|| format!("t_{}", short_id()));
    let from = str_field(raw, "from")
        .or_else(|| str_field(raw, "source"))
        .unwrap_or_default();
    let to = str_field(raw, "to")
        .or_else(|| str_field(raw, "target"))
        .unwrap_or_default();

    let mut transition = ProcessTransition::new(id, from, to);
    transition.condition = str_field(raw, "condition");
    transition.label = str_field(raw, "label");
    transition
}

fn str_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}
