//! The layout front door and the backend substitution seam

use crate::graph::ProcessGraph;
use crate::position::Direction;
use crate::{layering, ordering, position};
use procflow_types::{BusinessProcess, NodeId, Position};
use tracing::debug;

/// The layout contract: given a process, produce a position for each
/// node. A general-purpose external layout engine can stand in for the
/// intrinsic algorithm as long as it honors this interface; that call
/// is the only place the core is allowed to wait on anything.
pub trait LayoutBackend {
    fn positions(&self, process: &BusinessProcess, direction: Direction) -> Vec<(NodeId, Position)>;
}

/// The intrinsic layering → ordering → positioning pipeline
#[derive(Clone, Copy, Debug, Default)]
pub struct LayeredBackend;

impl LayoutBackend for LayeredBackend {
    fn positions(&self, process: &BusinessProcess, direction: Direction) -> Vec<(NodeId, Position)> {
        let graph = ProcessGraph::build(process);
        let layers = layering::assign_layers(&graph);
        let ordered = ordering::order_layers(&graph, &layers);
        let placed = position::place(&ordered, graph.len(), direction);
        process
            .nodes
            .iter()
            .zip(placed)
            .map(|(node, pos)| (node.id.clone(), pos))
            .collect()
    }
}

/// Lay out a process with the intrinsic backend
pub fn layout(process: &mut BusinessProcess, direction: Direction) {
    layout_with(&LayeredBackend, process, direction);
}

/// Lay out a process with a caller-supplied backend.
///
/// Never fails. An empty process is a no-op, and a process whose nodes
/// all carry non-origin positions is left untouched so externally
/// supplied coordinates are preserved.
pub fn layout_with(
    backend: &dyn LayoutBackend,
    process: &mut BusinessProcess,
    direction: Direction,
) {
    if process.nodes.is_empty() {
        return;
    }
    if !process.needs_layout() {
        debug!(process = %process.id, "all nodes already positioned, skipping layout");
        return;
    }

    for (id, position) in backend.positions(process, direction) {
        if let Some(node) = process.get_node_mut(&id) {
            node.position = position;
        }
    }
    debug!(
        process = %process.id,
        nodes = process.node_count(),
        "layout assigned"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use procflow_types::{NodeType, ProcessNode, ProcessTransition};
    use proptest::prelude::*;

    fn chain(k: usize) -> BusinessProcess {
        let mut p = BusinessProcess::new("p", "Chain", "CHAIN");
        for i in 0..k {
            p.add_node(ProcessNode::new(format!("n{i}"), format!("Step {i}"), NodeType::Task))
                .unwrap();
        }
        for i in 1..k {
            p.add_transition(ProcessTransition::new(
                format!("t{i}"),
                format!("n{}", i - 1),
                format!("n{i}"),
            ));
        }
        p
    }

    #[test]
    fn test_chain_positions_increase_along_primary_axis() {
        let mut p = chain(5);
        layout(&mut p, Direction::TopDown);
        let ys: Vec<f64> = p.nodes.iter().map(|n| n.position.y).collect();
        for pair in ys.windows(2) {
            assert!(pair[0] < pair[1]);
        }

        let mut p = chain(5);
        layout(&mut p, Direction::LeftToRight);
        let xs: Vec<f64> = p.nodes.iter().map(|n| n.position.x).collect();
        for pair in xs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_two_node_cycle_lays_out_both_nodes() {
        let mut p = BusinessProcess::new("p", "Cycle", "CYCLE");
        p.add_node(ProcessNode::new("a", "A", NodeType::Task)).unwrap();
        p.add_node(ProcessNode::new("b", "B", NodeType::Task)).unwrap();
        p.add_transition(ProcessTransition::new("t1", "a", "b"));
        p.add_transition(ProcessTransition::new("t2", "b", "a"));

        layout(&mut p, Direction::TopDown);
        assert!(p.nodes.iter().all(|n| !n.position.is_origin()));
    }

    #[test]
    fn test_empty_process_is_noop() {
        let mut p = BusinessProcess::new("p", "Empty", "EMPTY");
        layout(&mut p, Direction::TopDown);
        assert_eq!(p.node_count(), 0);
    }

    #[test]
    fn test_external_positions_preserved() {
        let mut p = BusinessProcess::new("p", "Placed", "PLACED");
        p.add_node(ProcessNode::new("a", "A", NodeType::Task).at(500.0, 500.0))
            .unwrap();
        p.add_node(ProcessNode::new("b", "B", NodeType::Task).at(700.0, 500.0))
            .unwrap();

        layout(&mut p, Direction::TopDown);
        assert_eq!(p.nodes[0].position, Position::new(500.0, 500.0));
        assert_eq!(p.nodes[1].position, Position::new(700.0, 500.0));
    }

    #[test]
    fn test_partially_placed_process_is_relaid() {
        let mut p = chain(3);
        p.get_node_mut(&NodeId::new("n0")).unwrap().position = Position::new(500.0, 500.0);
        layout(&mut p, Direction::TopDown);
        // One origin node is enough to trigger a full pass.
        assert!(p.nodes.iter().all(|n| !n.position.is_origin()));
    }

    #[test]
    fn test_custom_backend_is_honored() {
        struct Pin;
        impl LayoutBackend for Pin {
            fn positions(
                &self,
                process: &BusinessProcess,
                _direction: Direction,
            ) -> Vec<(NodeId, Position)> {
                process
                    .nodes
                    .iter()
                    .map(|n| (n.id.clone(), Position::new(1.0, 2.0)))
                    .collect()
            }
        }

        let mut p = chain(2);
        layout_with(&Pin, &mut p, Direction::TopDown);
        assert!(p.nodes.iter().all(|n| n.position == Position::new(1.0, 2.0)));
    }

    proptest! {
        /// Random graphs, cycles and islands included: layout always
        /// terminates and leaves no node at the origin.
        #[test]
        fn prop_every_node_is_positioned(
            node_count in 1usize..24,
            edges in proptest::collection::vec((0usize..24, 0usize..24), 0..60)
        ) {
            let mut p = BusinessProcess::new("p", "Random", "RANDOM");
            for i in 0..node_count {
                p.add_node(ProcessNode::new(format!("n{i}"), format!("N{i}"), NodeType::Task))
                    .unwrap();
            }
            for (i, (from, to)) in edges.iter().enumerate() {
                p.add_transition(ProcessTransition::new(
                    format!("t{i}"),
                    format!("n{}", from % node_count),
                    format!("n{}", to % node_count),
                ));
            }

            layout(&mut p, Direction::TopDown);
            prop_assert!(p.nodes.iter().all(|n| !n.position.is_origin()));
        }
    }
}
