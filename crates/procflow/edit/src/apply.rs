//! Applying edit operations: copy first, then write

use crate::{EditError, EditOp, EditResult};
use procflow_types::{BusinessProcess, Position, ProcessNode, ProcessTransition};
use uuid::Uuid;

/// Apply one operation to a deep copy of `process`, returning the new
/// value. The input is never mutated.
pub fn apply(process: &BusinessProcess, op: &EditOp) -> EditResult<BusinessProcess> {
    let mut next = process.clone();

    match op {
        EditOp::AddNode {
            id,
            name,
            node_type,
            description,
            assignee,
            form_ref,
        } => {
            let id = id.clone().unwrap_or_else(|| synth_id("node").into());
            let mut node = ProcessNode::new(id, name.clone(), *node_type);
            node.description = description.clone();
            node.assignee = assignee.clone();
            node.form_ref = form_ref.clone();
            node.position = Position::ORIGIN; // pending re-layout
            next.add_node(node)?;
        }

        EditOp::RemoveNode { id } => {
            if !next.contains_node(id) {
                return Err(EditError::NodeNotFound(id.clone()));
            }
            next.nodes.retain(|n| &n.id != id);
            // Referential integrity: drop every transition touching
            // the removed node.
            next.transitions.retain(|t| !t.references(id));
        }

        EditOp::UpdateNode { id, patch } => {
            let node = next
                .get_node_mut(id)
                .ok_or_else(|| EditError::NodeNotFound(id.clone()))?;
            patch.merge_into(node);
        }

        EditOp::AddTransition {
            id,
            from,
            to,
            condition,
            label,
        } => {
            let id = id.clone().unwrap_or_else(|| synth_id("t").into());
            let mut transition = ProcessTransition::new(id, from.clone(), to.clone());
            transition.condition = condition.clone();
            transition.label = label.clone();
            next.add_transition(transition);
        }

        EditOp::RemoveTransition { from, to } => {
            let before = next.transitions.len();
            next.transitions.retain(|t| !(&t.from == from && &t.to == to));
            if next.transitions.len() == before {
                return Err(EditError::TransitionNotFound {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }

        EditOp::UpdateTransition { from, to, patch } => {
            let transition = next
                .transitions
                .iter_mut()
                .find(|t| &t.from == from && &t.to == to)
                .ok_or_else(|| EditError::TransitionNotFound {
                    from: from.clone(),
                    to: to.clone(),
                })?;
            patch.merge_into(transition);
        }
    }

    Ok(next)
}

/// Apply a batch strictly in order, each operation on the result of
/// the previous one. The original is untouched even when a later
/// operation fails.
pub fn apply_all(process: &BusinessProcess, ops: &[EditOp]) -> EditResult<BusinessProcess> {
    let mut current = process.clone();
    for op in ops {
        current = apply(&current, op)?;
    }
    Ok(current)
}

fn synth_id(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &id[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodePatch, TransitionPatch};
    use procflow_types::{NodeId, NodeType};

    fn review_process() -> BusinessProcess {
        let mut p = BusinessProcess::new("p1", "Review", "REVIEW");
        p.add_node(ProcessNode::new("start", "Start", NodeType::Start)).unwrap();
        p.add_node(ProcessNode::new("review", "Review", NodeType::Task)).unwrap();
        p.add_node(ProcessNode::new("end", "Done", NodeType::End)).unwrap();
        p.add_transition(ProcessTransition::new("t1", "start", "review"));
        p.add_transition(ProcessTransition::new("t2", "review", "end"));
        p
    }

    #[test]
    fn test_input_is_never_mutated() {
        let original = review_process();
        let snapshot = original.clone();

        let _ = apply(&original, &EditOp::RemoveNode { id: NodeId::new("review") }).unwrap();
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_add_node_synthesizes_id_and_defaults() {
        let p = review_process();
        let next = apply(
            &p,
            &EditOp::AddNode {
                id: None,
                name: "Archive".into(),
                node_type: NodeType::default(),
                description: None,
                assignee: None,
                form_ref: None,
            },
        )
        .unwrap();

        assert_eq!(next.node_count(), 4);
        let added = &next.nodes[3];
        assert!(added.id.as_str().starts_with("node_"));
        assert_eq!(added.node_type, NodeType::Task);
        assert!(added.position.is_origin());
    }

    #[test]
    fn test_add_node_duplicate_id_is_error() {
        let p = review_process();
        let result = apply(
            &p,
            &EditOp::AddNode {
                id: Some(NodeId::new("review")),
                name: "Clash".into(),
                node_type: NodeType::Task,
                description: None,
                assignee: None,
                form_ref: None,
            },
        );
        assert!(matches!(result, Err(EditError::Model(_))));
    }

    #[test]
    fn test_remove_node_removes_referencing_transitions() {
        let p = review_process();
        let next = apply(&p, &EditOp::RemoveNode { id: NodeId::new("review") }).unwrap();

        assert_eq!(next.node_count(), 2);
        assert!(next
            .transitions
            .iter()
            .all(|t| !t.references(&NodeId::new("review"))));
        assert_eq!(next.transition_count(), 0);
    }

    #[test]
    fn test_remove_missing_node_is_error() {
        let result = apply(
            &review_process(),
            &EditOp::RemoveNode { id: NodeId::new("ghost") },
        );
        assert!(matches!(result, Err(EditError::NodeNotFound(_))));
    }

    #[test]
    fn test_update_node_merges_patch() {
        let next = apply(
            &review_process(),
            &EditOp::UpdateNode {
                id: NodeId::new("review"),
                patch: NodePatch {
                    name: Some("Deep review".into()),
                    assignee: Some("lead".into()),
                    ..NodePatch::default()
                },
            },
        )
        .unwrap();

        let node = next.get_node(&NodeId::new("review")).unwrap();
        assert_eq!(node.name, "Deep review");
        assert_eq!(node.assignee.as_deref(), Some("lead"));
        assert_eq!(node.node_type, NodeType::Task);
    }

    #[test]
    fn test_remove_transition_by_pair() {
        let next = apply(
            &review_process(),
            &EditOp::RemoveTransition {
                from: NodeId::new("review"),
                to: NodeId::new("end"),
            },
        )
        .unwrap();
        assert_eq!(next.transition_count(), 1);
    }

    #[test]
    fn test_update_missing_transition_is_error() {
        let result = apply(
            &review_process(),
            &EditOp::UpdateTransition {
                from: NodeId::new("end"),
                to: NodeId::new("start"),
                patch: TransitionPatch::default(),
            },
        );
        assert!(matches!(result, Err(EditError::TransitionNotFound { .. })));
    }

    #[test]
    fn test_batch_applies_in_order() {
        // Add a node, then connect it — the second op must see the
        // first op's result.
        let ops = vec![
            EditOp::AddNode {
                id: Some(NodeId::new("archive")),
                name: "Archive".into(),
                node_type: NodeType::Task,
                description: None,
                assignee: None,
                form_ref: None,
            },
            EditOp::AddTransition {
                id: None,
                from: NodeId::new("end"),
                to: NodeId::new("archive"),
                condition: None,
                label: Some("archived".into()),
            },
        ];

        let p = review_process();
        let next = apply_all(&p, &ops).unwrap();
        assert_eq!(next.node_count(), 4);
        assert_eq!(next.transition_count(), 3);
        assert_eq!(p.node_count(), 3);
    }

    #[test]
    fn test_failed_batch_leaves_original_intact() {
        let p = review_process();
        let ops = vec![
            EditOp::RemoveNode { id: NodeId::new("review") },
            EditOp::RemoveNode { id: NodeId::new("ghost") },
        ];
        assert!(apply_all(&p, &ops).is_err());
        assert_eq!(p.node_count(), 3);
    }
}
