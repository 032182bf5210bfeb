//! The canonical business process: a directed graph of nodes and transitions

use crate::{ModelError, ModelResult, NodeId, NodeType, ProcessNode, ProcessTransition};
use serde::{Deserialize, Serialize};

/// The canonical model every input dialect converges to.
///
/// Node and transition order is meaningful: parsers emit nodes in
/// discovery order and the layout engine uses input order as the
/// tie-breaker, so order is preserved through serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessProcess {
    pub id: String,
    pub name: String,
    /// Stable business code used to reference this process from other artifacts
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<ProcessNode>,
    #[serde(default, alias = "edges")]
    pub transitions: Vec<ProcessTransition>,
}

impl BusinessProcess {
    pub fn new(id: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            description: None,
            nodes: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a node, rejecting duplicate ids
    pub fn add_node(&mut self, node: ProcessNode) -> ModelResult<()> {
        if self.contains_node(&node.id) {
            return Err(ModelError::DuplicateNode(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Append a transition. Dangling endpoints are allowed; the
    /// validator reports them as advisories.
    pub fn add_transition(&mut self, transition: ProcessTransition) {
        self.transitions.push(transition);
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&ProcessNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn get_node_mut(&mut self, id: &NodeId) -> Option<&mut ProcessNode> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    /// Transitions leaving the given node
    pub fn outgoing(&self, id: &NodeId) -> Vec<&ProcessTransition> {
        self.transitions.iter().filter(|t| &t.from == id).collect()
    }

    /// Transitions entering the given node
    pub fn incoming(&self, id: &NodeId) -> Vec<&ProcessTransition> {
        self.transitions.iter().filter(|t| &t.to == id).collect()
    }

    pub fn start_nodes(&self) -> Vec<&ProcessNode> {
        self.nodes
            .iter()
            .filter(|n| n.node_type == NodeType::Start)
            .collect()
    }

    pub fn end_nodes(&self) -> Vec<&ProcessNode> {
        self.nodes
            .iter()
            .filter(|n| n.node_type == NodeType::End)
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Whether any node still sits at the origin awaiting layout
    pub fn needs_layout(&self) -> bool {
        self.nodes.iter().any(ProcessNode::needs_layout)
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Lossless JSON export consumed by the artifact store and renderer
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
