//! Process nodes: typed steps in a business process graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node within a process
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The closed set of node kinds a process may contain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Entry point of the process
    Start,
    /// Terminal point of the process
    End,
    /// A unit of work performed by a person or service
    #[default]
    Task,
    /// A branching or merging decision point
    Gateway,
    /// A nested process invoked as a single step
    Subprocess,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeType::Start => "start",
            NodeType::End => "end",
            NodeType::Task => "task",
            NodeType::Gateway => "gateway",
            NodeType::Subprocess => "subprocess",
        };
        write!(f, "{s}")
    }
}

/// A 2-D coordinate assigned by the layout engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The "pending layout" marker position
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether this position still awaits layout
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// A single step in a business process
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessNode {
    /// Unique within the owning process
    pub id: NodeId,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    /// Display name shown on the diagram
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Person or role responsible for the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Code of an external form artifact bound to this step
    #[serde(rename = "formRef", default, skip_serializing_if = "Option::is_none")]
    pub form_ref: Option<String>,
    #[serde(default)]
    pub position: Position,
}

impl ProcessNode {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            name: name.into(),
            description: None,
            assignee: None,
            form_ref: None,
            position: Position::ORIGIN,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_form_ref(mut self, form_ref: impl Into<String>) -> Self {
        self.form_ref = Some(form_ref.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Whether this node still awaits a layout pass
    pub fn needs_layout(&self) -> bool {
        self.position.is_origin()
    }
}
