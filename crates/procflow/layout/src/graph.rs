//! Index-based adjacency view over a process graph

use procflow_types::{BusinessProcess, NodeType};
use std::collections::HashMap;

/// Dense adjacency built once per layout run. Transitions whose
/// endpoints are not declared nodes are ignored here; the validator
/// reports them separately.
pub(crate) struct ProcessGraph {
    pub preds: Vec<Vec<usize>>,
    pub succs: Vec<Vec<usize>>,
    /// Indices of start-typed or indegree-zero nodes, input order
    pub roots: Vec<usize>,
}

impl ProcessGraph {
    pub fn build(process: &BusinessProcess) -> Self {
        let index: HashMap<&str, usize> = process
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();

        let n = process.nodes.len();
        let mut preds = vec![Vec::new(); n];
        let mut succs = vec![Vec::new(); n];
        for t in &process.transitions {
            let (Some(&from), Some(&to)) =
                (index.get(t.from.as_str()), index.get(t.to.as_str()))
            else {
                continue;
            };
            succs[from].push(to);
            preds[to].push(from);
        }

        let mut roots: Vec<usize> = (0..n)
            .filter(|&i| process.nodes[i].node_type == NodeType::Start || preds[i].is_empty())
            .collect();
        if roots.is_empty() && n > 0 {
            // Fully cyclic graph: fall back to the first node.
            roots.push(0);
        }

        Self { preds, succs, roots }
    }

    pub fn len(&self) -> usize {
        self.preds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procflow_types::{ProcessNode, ProcessTransition};

    fn process_with(edges: &[(&str, &str)], nodes: &[&str]) -> BusinessProcess {
        let mut p = BusinessProcess::new("p", "P", "P");
        for id in nodes {
            p.add_node(ProcessNode::new(*id, *id, NodeType::Task)).unwrap();
        }
        for (i, (from, to)) in edges.iter().enumerate() {
            p.add_transition(ProcessTransition::new(format!("t{i}"), *from, *to));
        }
        p
    }

    #[test]
    fn test_dangling_endpoints_ignored() {
        let p = process_with(&[("a", "ghost"), ("a", "b")], &["a", "b"]);
        let g = ProcessGraph::build(&p);
        assert_eq!(g.succs[0], vec![1]);
    }

    #[test]
    fn test_cycle_falls_back_to_first_node() {
        let p = process_with(&[("a", "b"), ("b", "a")], &["a", "b"]);
        let g = ProcessGraph::build(&p);
        assert_eq!(g.roots, vec![0]);
    }

    #[test]
    fn test_indegree_zero_roots() {
        let p = process_with(&[("a", "c"), ("b", "c")], &["a", "b", "c"]);
        let g = ProcessGraph::build(&p);
        assert_eq!(g.roots, vec![0, 1]);
    }
}
