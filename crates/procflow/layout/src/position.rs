//! Phase 3 — converting (layer, rank) into coordinates

use procflow_types::Position;
use serde::{Deserialize, Serialize};

/// Which axis the layer index drives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Layers stack downward; ranks spread horizontally
    #[default]
    TopDown,
    /// Layers march rightward; ranks spread vertically
    LeftToRight,
}

/// Fixed node footprint
const NODE_WIDTH: f64 = 160.0;
const NODE_HEIGHT: f64 = 72.0;
/// Gap between neighbors within a layer
const NODE_GAP: f64 = 60.0;
/// Gap between consecutive layers
const LAYER_GAP: f64 = 110.0;
/// Offset keeping every coordinate away from the origin marker
const MARGIN: f64 = 40.0;

/// Turn the ordered layers into concrete positions, one per node
/// index. Layers are centered on a shared axis so unevenly populated
/// layers stay visually balanced; the direction only decides which
/// computed value lands on which coordinate.
pub(crate) fn place(ordered: &[Vec<usize>], node_count: usize, direction: Direction) -> Vec<Position> {
    let (primary_extent, cross_extent) = match direction {
        Direction::TopDown => (NODE_HEIGHT, NODE_WIDTH),
        Direction::LeftToRight => (NODE_WIDTH, NODE_HEIGHT),
    };
    let primary_span = primary_extent + LAYER_GAP;
    let cross_span = cross_extent + NODE_GAP;

    let widest = ordered.iter().map(Vec::len).max().unwrap_or(0);
    let axis = MARGIN + (widest.saturating_sub(1)) as f64 / 2.0 * cross_span;

    let mut positions = vec![Position::ORIGIN; node_count];
    for (layer_index, layer) in ordered.iter().enumerate() {
        let primary = MARGIN + layer_index as f64 * primary_span;
        let half = (layer.len().saturating_sub(1)) as f64 / 2.0;
        for (rank, &node) in layer.iter().enumerate() {
            let cross = axis + (rank as f64 - half) * cross_span;
            positions[node] = match direction {
                Direction::TopDown => Position::new(cross, primary),
                Direction::LeftToRight => Position::new(primary, cross),
            };
        }
    }
    positions
}
