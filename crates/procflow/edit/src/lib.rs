//! Mutation engine for procflow
//!
//! Conversational editing applies discrete operations to an existing
//! [`BusinessProcess`](procflow_types::BusinessProcess). Every
//! operation works on a fresh copy and returns a new value; the input
//! is never aliased or mutated, so the caller's model stays valid even
//! when an operation in the middle of a batch fails.
//!
//! The serde shape of [`EditOp`] (an `op`-tagged enum with patch
//! payloads) doubles as the tool-call payload format for the external
//! conversational collaborator.

#![deny(unsafe_code)]

mod apply;
mod errors;
mod ops;

pub use apply::{apply, apply_all};
pub use errors::{EditError, EditResult};
pub use ops::{EditOp, NodePatch, TransitionPatch};
