//! Canonical process model for procflow
//!
//! Every supported input dialect — canonical JSON, the two XML markup
//! dialects, flow-text — converges on the types in this crate. The
//! model is a plain directed graph:
//!
//! - **BusinessProcess**: id, name, code, plus ordered node and
//!   transition lists. Always fully formed; empty lists are valid,
//!   half-built values are never handed to callers.
//! - **ProcessNode**: a typed step (`start`, `end`, `task`, `gateway`,
//!   `subprocess`) with an optional assignee, an optional reference to
//!   an external form artifact, and a 2-D position that layout fills in.
//! - **ProcessTransition**: a directed edge between node ids. Endpoints
//!   may transiently reference nodes that do not exist; that is a
//!   validation advisory, not a structural error.
//!
//! The serde form of `BusinessProcess` is the lossless persistence and
//! export format: serializing and re-importing yields an equal value.
//!
//! # Design Principles
//!
//! 1. Values, not handles. The model owns all of its data and is cheap
//!    to clone; editing produces new values.
//! 2. Node ids are unique within a process. `add_node` enforces it so
//!    the invariant holds for every producer.
//! 3. Positions are explicit. `Position::ORIGIN` means "pending
//!    layout"; anything else is an externally supplied coordinate that
//!    layout must preserve.

#![deny(unsafe_code)]

mod errors;
mod node;
mod process;
mod transition;

pub use errors::*;
pub use node::*;
pub use process::*;
pub use transition::*;
