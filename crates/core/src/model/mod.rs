//! Core data model for a single transformation.
//!
//! Every value here is created fresh per invocation:
//! - `SourceDocument`: the annotated input text plus its name and budget
//! - `Marker`: where a marker token begins
//! - `TestEntry`: a resolved (test label, function name) pair
//! - `GeneratedProgram`: the synthesized harness program

use serde::{Deserialize, Serialize};

/// Annotated source text handed to the transformer.
///
/// The text is never mutated; all derived text is built fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Test/program identifier (also the output directory name).
    pub name: String,
    /// Time budget for the harness, in milliseconds.
    pub budget: u64,
    /// Raw C/C++ source.
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, budget: u64, text: impl Into<String>) -> Self {
        Self { name: name.into(), budget, text: text.into() }
    }
}

/// Byte offset of a marker token, with its position in appearance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Zero-based index in left-to-right order.
    pub index: usize,
    /// Byte offset where the marker token begins.
    pub offset: usize,
}

/// One measurement call in the generated harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEntry {
    pub test_name: String,
    pub function_name: String,
}

impl TestEntry {
    /// Build an entry; a missing label falls back to the function name.
    pub fn new(test_name: Option<String>, function_name: impl Into<String>) -> Self {
        let function_name = function_name.into();
        let test_name = test_name.unwrap_or_else(|| function_name.clone());
        Self { test_name, function_name }
    }
}

/// Output of a successful transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProgram {
    pub name: String,
    pub budget: u64,
    /// Resolved entries, in marker order.
    pub entries: Vec<TestEntry>,
    /// Include directive, original source, and synthesized entry point.
    pub text: String,
}
