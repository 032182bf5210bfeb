//! Structured process markup parser
//!
//! Ingests the event/task/gateway XML dialect: `startEvent`/`endEvent`,
//! task-like elements (`task`, `userTask`, `serviceTask`), gateways
//! (`exclusiveGateway`, `parallelGateway`), nested `subProcess`
//! elements, and `sequenceFlow` edges with `sourceRef`/`targetRef`.
//! Matching is on local element names, so namespace prefixes never
//! affect the result.

use crate::{code_from_name, short_id, ImportError, ImportResult};
use procflow_types::{BusinessProcess, NodeType, ProcessNode, ProcessTransition};
use roxmltree::Document;
use tracing::warn;

pub fn parse(input: &str) -> ImportResult<BusinessProcess> {
    let doc = Document::parse(input)?;
    let root = doc
        .descendants()
        .find(|n| n.tag_name().name() == "process")
        .ok_or(ImportError::MissingElement("process"))?;

    let name = root
        .attribute("name")
        .or_else(|| root.attribute("id"))
        .unwrap_or("Process")
        .to_string();
    let mut process = BusinessProcess::new(
        root.attribute("id").map(str::to_string).unwrap_or_else(short_id),
        name.clone(),
        code_from_name(&name),
    );

    let mut seq = 0usize;
    for element in root.descendants().filter(|n| n.is_element()) {
        let local = element.tag_name().name();

        if local == "sequenceFlow" {
            let (Some(source), Some(target)) =
                (element.attribute("sourceRef"), element.attribute("targetRef"))
            else {
                warn!("sequence flow without sourceRef/targetRef, skipping");
                continue;
            };
            seq += 1;
            let id = element
                .attribute("id")
                .map(str::to_string)
                .unwrap_or_else(|| format!("flow{seq}"));
            let mut transition = ProcessTransition::new(id, source, target);
            transition.label = element.attribute("name").map(str::to_string);
            transition.condition = element
                .children()
                .find(|c| c.tag_name().name() == "conditionExpression")
                .and_then(|c| c.text())
                .map(|s| s.trim().to_string());
            process.add_transition(transition);
            continue;
        }

        let Some(node_type) = node_type_for(local) else {
            continue;
        };
        let id = element
            .attribute("id")
            .map(str::to_string)
            .unwrap_or_else(|| format!("node_{}", short_id()));
        if process.contains_node(&id.as_str().into()) {
            warn!(node_id = %id, "duplicate element id, keeping first");
            continue;
        }
        let display = element.attribute("name").unwrap_or(&id).to_string();
        let mut node = ProcessNode::new(id, display, node_type);
        node.assignee = element.attribute("assignee").map(str::to_string);
        node.form_ref = element.attribute("formKey").map(str::to_string);
        process.add_node(node)?;
    }

    Ok(process)
}

/// Role-based element classification; unknown elements are skipped
fn node_type_for(local_name: &str) -> Option<NodeType> {
    match local_name {
        "startEvent" => Some(NodeType::Start),
        "endEvent" => Some(NodeType::End),
        "task" | "userTask" | "serviceTask" => Some(NodeType::Task),
        "exclusiveGateway" | "parallelGateway" => Some(NodeType::Gateway),
        "subProcess" => Some(NodeType::Subprocess),
        _ => None,
    }
}
