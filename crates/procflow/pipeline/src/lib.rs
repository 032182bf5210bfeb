//! The procflow pipeline: raw text in, laid-out canonical model out
//!
//! Sequences the whole conversion — format detection, dialect parsing,
//! advisory validation, layered layout — and returns a single
//! [`Conversion`] envelope. Every parser failure is caught at this
//! boundary and normalized: callers see `{success: false, error,
//! format}`, never an unwound panic and never a half-built model.
//!
//! Validation is advisory by design. A dangling transition or a
//! missing end node is something to tell the user about, not a reason
//! to throw away a parse the user can fix conversationally.

#![deny(unsafe_code)]

mod convert;
mod validate;

pub use convert::{convert, convert_with, Conversion};
pub use validate::validate;

pub use procflow_import::{detect, ImportError, SourceFormat};
pub use procflow_layout::{Direction, LayeredBackend, LayoutBackend};
pub use procflow_types::BusinessProcess;
