//! Advisory validation: warnings, never failures

use procflow_types::BusinessProcess;
use std::collections::HashSet;

/// Inspect a process and report advisory warnings. Always succeeds;
/// the result rides along on a successful conversion.
pub fn validate(process: &BusinessProcess) -> Vec<String> {
    let mut warnings = Vec::new();
    check_transition_endpoints(process, &mut warnings);
    check_isolated_nodes(process, &mut warnings);
    check_has_start(process, &mut warnings);
    check_has_end(process, &mut warnings);
    warnings
}

fn check_transition_endpoints(process: &BusinessProcess, warnings: &mut Vec<String>) {
    let ids: HashSet<&str> = process.nodes.iter().map(|n| n.id.as_str()).collect();
    for t in &process.transitions {
        if !ids.contains(t.from.as_str()) {
            warnings.push(format!(
                "Transition '{}' has unknown source node '{}'",
                t.id, t.from
            ));
        }
        if !ids.contains(t.to.as_str()) {
            warnings.push(format!(
                "Transition '{}' has unknown target node '{}'",
                t.id, t.to
            ));
        }
    }
}

/// Single-node processes are exempt: a lone node is the whole flow,
/// not an island.
fn check_isolated_nodes(process: &BusinessProcess, warnings: &mut Vec<String>) {
    if process.node_count() <= 1 {
        return;
    }
    let mut referenced: HashSet<&str> = HashSet::new();
    for t in &process.transitions {
        referenced.insert(t.from.as_str());
        referenced.insert(t.to.as_str());
    }
    for node in &process.nodes {
        if !referenced.contains(node.id.as_str()) {
            warnings.push(format!("Node '{}' is an isolated node", node.id));
        }
    }
}

fn check_has_start(process: &BusinessProcess, warnings: &mut Vec<String>) {
    if !process.nodes.is_empty() && process.start_nodes().is_empty() {
        warnings.push("Process has no start node".to_string());
    }
}

fn check_has_end(process: &BusinessProcess, warnings: &mut Vec<String>) {
    if !process.nodes.is_empty() && process.end_nodes().is_empty() {
        warnings.push("Process has no end node".to_string());
    }
}
