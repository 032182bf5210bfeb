//! Process transitions: directed edges between nodes

use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a transition within a process
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionId(String);

impl TransitionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransitionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransitionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A directed edge between two nodes of a process.
///
/// Endpoints are node ids, not node references: a transition may point
/// at an id that is not (or not yet) declared. The validator reports
/// that as an advisory, the structure stays intact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessTransition {
    pub id: TransitionId,
    #[serde(alias = "source")]
    pub from: NodeId,
    #[serde(alias = "target")]
    pub to: NodeId,
    /// Guard expression deciding whether the edge is taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Display label drawn along the edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ProcessTransition {
    pub fn new(id: impl Into<TransitionId>, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            condition: None,
            label: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether this transition touches the given node, as source or target
    pub fn references(&self, node_id: &NodeId) -> bool {
        &self.from == node_id || &self.to == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_target_aliases() {
        let t: ProcessTransition =
            serde_json::from_str(r#"{"id":"t1","source":"a","target":"b"}"#).unwrap();
        assert_eq!(t.from, NodeId::new("a"));
        assert_eq!(t.to, NodeId::new("b"));
    }

    #[test]
    fn test_serializes_as_from_to() {
        let t = ProcessTransition::new("t1", "a", "b").with_label("yes");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["from"], "a");
        assert_eq!(json["to"], "b");
        assert_eq!(json["label"], "yes");
        assert!(json.get("condition").is_none());
    }

    #[test]
    fn test_references_either_endpoint() {
        let t = ProcessTransition::new("t1", "a", "b");
        assert!(t.references(&NodeId::new("a")));
        assert!(t.references(&NodeId::new("b")));
        assert!(!t.references(&NodeId::new("c")));
    }
}
