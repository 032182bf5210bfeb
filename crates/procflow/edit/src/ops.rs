//! The edit operation vocabulary and its serde wire shape

use procflow_types::{NodeId, NodeType, Position, ProcessNode, ProcessTransition, TransitionId};
use serde::{Deserialize, Serialize};

/// A discrete edit to a business process.
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "add_node", "name": "Review", "type": "task"}` or
/// `{"op": "remove_transition", "from": "a", "to": "b"}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    AddNode {
        /// Synthesized when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<NodeId>,
        name: String,
        #[serde(rename = "type", default)]
        node_type: NodeType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assignee: Option<String>,
        #[serde(rename = "formRef", default, skip_serializing_if = "Option::is_none")]
        form_ref: Option<String>,
    },
    RemoveNode {
        id: NodeId,
    },
    UpdateNode {
        id: NodeId,
        patch: NodePatch,
    },
    AddTransition {
        /// Synthesized when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<TransitionId>,
        from: NodeId,
        to: NodeId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    RemoveTransition {
        from: NodeId,
        to: NodeId,
    },
    UpdateTransition {
        from: NodeId,
        to: NodeId,
        patch: TransitionPatch,
    },
}

/// Field changes to merge into an existing node. Absent fields are
/// left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(rename = "formRef", default, skip_serializing_if = "Option::is_none")]
    pub form_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl NodePatch {
    pub(crate) fn merge_into(&self, node: &mut ProcessNode) {
        if let Some(name) = &self.name {
            node.name = name.clone();
        }
        if let Some(node_type) = self.node_type {
            node.node_type = node_type;
        }
        if let Some(description) = &self.description {
            node.description = Some(description.clone());
        }
        if let Some(assignee) = &self.assignee {
            node.assignee = Some(assignee.clone());
        }
        if let Some(form_ref) = &self.form_ref {
            node.form_ref = Some(form_ref.clone());
        }
        if let Some(position) = self.position {
            node.position = position;
        }
    }
}

/// Field changes to merge into an existing transition
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TransitionPatch {
    pub(crate) fn merge_into(&self, transition: &mut ProcessTransition) {
        if let Some(condition) = &self.condition {
            transition.condition = Some(condition.clone());
        }
        if let Some(label) = &self.label {
            transition.label = Some(label.clone());
        }
    }
}
