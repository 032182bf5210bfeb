//! Layered layout for procflow process graphs
//!
//! Assigns deterministic 2-D positions to every node of a
//! [`BusinessProcess`](procflow_types::BusinessProcess) in three
//! ordered phases:
//!
//! 1. **Layering** — cycle-tolerant longest-path ranking from the start
//!    nodes (or any node without incoming transitions). A back-edge
//!    short-circuits to the best partial rank instead of recursing, so
//!    cyclic graphs terminate in linear time.
//! 2. **Ordering** — iterative barycenter sweeps reduce edge crossings
//!    within each layer.
//! 3. **Positioning** — fixed node footprint and gaps, each layer
//!    centered on a shared axis. The same math serves top-to-bottom and
//!    left-to-right conventions by swapping which coordinate the layer
//!    index drives.
//!
//! Layout never fails: an empty process is a no-op, and a process whose
//! nodes all carry non-origin positions is left untouched so externally
//! supplied coordinates survive.
//!
//! The [`LayoutBackend`] trait is the substitution seam for an external
//! general-purpose layout engine; [`LayeredBackend`] is the intrinsic
//! implementation.

#![deny(unsafe_code)]

mod engine;
mod graph;
mod layering;
mod ordering;
mod position;

pub use engine::{layout, layout_with, LayeredBackend, LayoutBackend};
pub use position::Direction;
