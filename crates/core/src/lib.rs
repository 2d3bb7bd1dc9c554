//! tcgen-core
//!
//! Core library for turning marker-annotated C/C++ snippets into runnable
//! time-complexity harness programs.
//!
//! This crate defines the data model, the lexical transformer (validate, scan,
//! resolve, synthesize), and the collaborators around it: program writers,
//! request/response interchange types, the script runner, and result plotting.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, a service, batch tooling).

pub mod config;
pub mod error;
pub mod interchange;
pub mod model;
pub mod output;
pub mod results;
pub mod runner;
pub mod transform;

pub use error::{MalformedReason, TransformError, TransformResult};
pub use model::{GeneratedProgram, Marker, SourceDocument, TestEntry};
pub use transform::{transform, Transformer};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
