//! Flow-text parser: the line-oriented diagram mini-language
//!
//! Grammar in brief:
//!
//! ```text
//! flowchart TD              header: graph | flowchart | stateDiagram
//! A[Submit request]         bracketed label   ⇒ task
//! B((Start))                doubled parens    ⇒ start/end (keyword on id)
//! C{Approved?}              braced label      ⇒ gateway
//! A --> C                   edge
//! C -->|yes| B              labeled edge
//! ```
//!
//! Declarations and edges interleave freely, edges may chain
//! (`A-->B-->C`), endpoints may be declared inline on an edge line, and
//! an endpoint never declared is lazily created as a task named by its
//! id. First-seen identity wins for a given id.

use crate::{short_id, ImportResult};
use procflow_types::{BusinessProcess, NodeType, ProcessNode, ProcessTransition};

const ARROW: &str = "-->";

/// A node reference on a line: a bare id, or an id with shape + label
struct NodeRef {
    id: String,
    declaration: Option<(String, NodeType)>,
}

pub fn parse(input: &str) -> ImportResult<BusinessProcess> {
    let mut process = BusinessProcess::new(short_id(), "Flow diagram", "FLOW_DIAGRAM");
    let mut seq = 0usize;

    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    // The header line carries only the diagram kind and direction.
    let _header = lines.next();

    for line in lines {
        if line.starts_with("%%") {
            continue; // comment
        }

        if !line.contains(ARROW) {
            if let Some(node_ref) = parse_node_ref(line) {
                declare(&mut process, &node_ref);
            }
            continue;
        }

        // Split the chain A -->|l1| B --> C into endpoint segments;
        // each segment after the first may open with a |label|.
        let mut previous: Option<String> = None;
        for segment in line.split(ARROW) {
            let segment = segment.trim();
            let (label, rest) = split_label(segment);
            let Some(node_ref) = parse_node_ref(rest) else {
                continue;
            };
            declare(&mut process, &node_ref);

            if let Some(from) = previous.take() {
                seq += 1;
                let mut transition =
                    ProcessTransition::new(format!("t{seq}"), from, node_ref.id.clone());
                transition.label = label;
                process.add_transition(transition);
            }
            previous = Some(node_ref.id);
        }
    }

    Ok(process)
}

/// First-seen identity wins: re-declarations of a known id are ignored
fn declare(process: &mut BusinessProcess, node_ref: &NodeRef) {
    if process.contains_node(&node_ref.id.as_str().into()) {
        return;
    }
    let (name, node_type) = match &node_ref.declaration {
        Some((name, node_type)) => (name.clone(), *node_type),
        None => (node_ref.id.clone(), NodeType::Task),
    };
    // Node id uniqueness was checked above, insertion cannot fail.
    let _ = process.add_node(ProcessNode::new(node_ref.id.clone(), name, node_type));
}

/// Pull a leading `|label|` off an edge-target segment
fn split_label(segment: &str) -> (Option<String>, &str) {
    let Some(rest) = segment.strip_prefix('|') else {
        return (None, segment);
    };
    match rest.split_once('|') {
        Some((label, tail)) => (Some(label.trim().to_string()), tail.trim()),
        None => (None, segment),
    }
}

/// Parse `ID`, `ID[Label]`, `ID((Label))`, or `ID{Label}`
fn parse_node_ref(text: &str) -> Option<NodeRef> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some((id, label)) = delimited(text, "((", "))") {
        // Doubled parens mark a terminator; the id keyword decides
        // which end of the flow it sits at.
        let node_type = if id.to_lowercase().contains("start") {
            NodeType::Start
        } else {
            NodeType::End
        };
        return Some(NodeRef {
            id,
            declaration: Some((label, node_type)),
        });
    }
    if let Some((id, label)) = delimited(text, "[", "]") {
        return Some(NodeRef {
            id,
            declaration: Some((label, NodeType::Task)),
        });
    }
    if let Some((id, label)) = delimited(text, "{", "}") {
        return Some(NodeRef {
            id,
            declaration: Some((label, NodeType::Gateway)),
        });
    }

    let id: String = text.split_whitespace().next()?.to_string();
    Some(NodeRef {
        id,
        declaration: None,
    })
}

fn delimited(text: &str, open: &str, close: &str) -> Option<(String, String)> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    let id = text[..start].trim().to_string();
    let label = text[start + open.len()..end].trim().to_string();
    if id.is_empty() {
        return None;
    }
    Some((id, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use procflow_types::NodeId;

    #[test]
    fn test_reference_scenario() {
        let process = parse("flowchart TD\nA[Start Task]-->B{Decide}\nB-->|yes|C[End]\n").unwrap();

        assert_eq!(process.node_count(), 3);
        let types: Vec<NodeType> = ["A", "B", "C"]
            .iter()
            .map(|id| process.get_node(&NodeId::new(*id)).unwrap().node_type)
            .collect();
        assert_eq!(types, vec![NodeType::Task, NodeType::Gateway, NodeType::Task]);

        assert_eq!(process.transition_count(), 2);
        assert_eq!(process.transitions[0].from, NodeId::new("A"));
        assert_eq!(process.transitions[0].to, NodeId::new("B"));
        assert_eq!(process.transitions[0].label, None);
        assert_eq!(process.transitions[1].label.as_deref(), Some("yes"));
    }

    #[test]
    fn test_doubled_parens_start_end_heuristic() {
        let process = parse("graph TD\nbegin_start((Begin))-->done((Done))\n").unwrap();
        assert_eq!(
            process.get_node(&NodeId::new("begin_start")).unwrap().node_type,
            NodeType::Start
        );
        assert_eq!(
            process.get_node(&NodeId::new("done")).unwrap().node_type,
            NodeType::End
        );
    }

    #[test]
    fn test_undeclared_endpoint_becomes_task() {
        let process = parse("graph LR\nA --> B\n").unwrap();
        let b = process.get_node(&NodeId::new("B")).unwrap();
        assert_eq!(b.node_type, NodeType::Task);
        assert_eq!(b.name, "B");
    }

    #[test]
    fn test_declarations_and_edges_interleave() {
        let input = "flowchart TD\nA --> B\nB{Decision point}\nA[Named later]\n";
        let process = parse(input).unwrap();
        // First-seen identity wins: A and B were created by the edge.
        assert_eq!(process.get_node(&NodeId::new("A")).unwrap().name, "A");
        assert_eq!(
            process.get_node(&NodeId::new("B")).unwrap().node_type,
            NodeType::Task
        );
        assert_eq!(process.node_count(), 2);
    }

    #[test]
    fn test_chained_edges_on_one_line() {
        let process = parse("graph TD\nA-->B-->C\n").unwrap();
        assert_eq!(process.node_count(), 3);
        assert_eq!(process.transition_count(), 2);
        assert_eq!(process.transitions[1].from, NodeId::new("B"));
        assert_eq!(process.transitions[1].to, NodeId::new("C"));
    }

    #[test]
    fn test_spaced_arrows_and_labels() {
        let process = parse("flowchart LR\nA --> |maybe| B\n").unwrap();
        assert_eq!(process.transitions[0].label.as_deref(), Some("maybe"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let process = parse("graph TD\n\n%% a comment\nA-->B\n").unwrap();
        assert_eq!(process.transition_count(), 1);
    }

    #[test]
    fn test_all_positions_pending_layout() {
        let process = parse("graph TD\nA-->B\n").unwrap();
        assert!(process.needs_layout());
    }
}
