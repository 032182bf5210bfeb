//! Phase 1 — cycle-tolerant longest-path layering

use crate::graph::ProcessGraph;

#[derive(Clone, Copy, PartialEq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// Assign every node exactly one layer.
///
/// `layer(n) = 1 + max(layer(p))` over predecessors, computed by
/// memoized depth-first recursion starting from the root set. A node
/// re-encountered while its own layer is still being computed is a
/// back-edge: recursion stops there and the best partial layer so far
/// is used, which guarantees termination in O(nodes + edges). Nodes the
/// forward traversal never reaches are appended below the current
/// maximum so none is left unranked.
pub(crate) fn assign_layers(graph: &ProcessGraph) -> Vec<usize> {
    let n = graph.len();
    let mut layers = vec![0usize; n];
    let mut state = vec![Visit::Unvisited; n];

    // Forward reachability from the roots decides which nodes belong
    // to the main flow.
    let mut reached = vec![false; n];
    let mut stack: Vec<usize> = graph.roots.clone();
    while let Some(node) = stack.pop() {
        if reached[node] {
            continue;
        }
        reached[node] = true;
        stack.extend(graph.succs[node].iter().copied());
    }

    for node in 0..n {
        if reached[node] {
            rank(node, graph, &mut layers, &mut state);
        }
    }

    let mut max_layer = (0..n)
        .filter(|&i| state[i] == Visit::Done)
        .map(|i| layers[i])
        .max()
        .unwrap_or(0);
    for node in 0..n {
        if state[node] != Visit::Done {
            max_layer += 1;
            layers[node] = max_layer;
            state[node] = Visit::Done;
        }
    }

    layers
}

fn rank(node: usize, graph: &ProcessGraph, layers: &mut [usize], state: &mut [Visit]) -> usize {
    match state[node] {
        Visit::Done => return layers[node],
        // Back-edge: the partial layer is the best answer available.
        Visit::InProgress => return layers[node],
        Visit::Unvisited => {}
    }
    state[node] = Visit::InProgress;

    let mut best = 0usize;
    for &pred in &graph.preds[node] {
        best = best.max(rank(pred, graph, layers, state) + 1);
    }
    layers[node] = layers[node].max(best);
    state[node] = Visit::Done;
    layers[node]
}
