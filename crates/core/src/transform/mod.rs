//! Marker-driven source transformer.
//!
//! Pipeline, one document at a time:
//! - `validate`: reject sources with their own entry point or no markers
//! - `scan`: lazily enumerate marker offsets left to right
//! - `resolve`: turn each marker into a `TestEntry` (label + function name)
//! - `synth`: emit include + original source + harness `main`
//!
//! Everything is a pure function of its inputs; a `Transformer` only holds the
//! harness profile and can be shared across threads.

pub mod cursor;
pub mod resolve;
pub mod scan;
pub mod synth;
pub mod validate;

use tracing::debug;

use crate::config::HarnessProfile;
use crate::error::TransformResult;
use crate::model::{GeneratedProgram, SourceDocument, TestEntry};

pub use cursor::Cursor;
pub use resolve::resolve;
pub use scan::MarkerScanner;
pub use synth::{c_string_literal, synthesize};
pub use validate::validate;

/// Transformer configured with the names of the external harness API.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    profile: HarnessProfile,
}

impl Transformer {
    pub fn new(profile: HarnessProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &HarnessProfile {
        &self.profile
    }

    /// Marker occurrences in `text`, without validation.
    pub fn markers<'a>(&'a self, text: &'a str) -> MarkerScanner<'a> {
        MarkerScanner::new(text, &self.profile.marker)
    }

    /// Validate `text` and resolve every marker, in order.
    ///
    /// All-or-nothing: the first malformed marker aborts resolution.
    pub fn resolve_entries(&self, text: &str) -> TransformResult<Vec<TestEntry>> {
        let text = validate(text, &self.profile)?;
        self.markers(text).map(|marker| resolve(text, marker, &self.profile.marker)).collect()
    }

    /// Build the harness program for `doc`.
    pub fn transform(&self, doc: &SourceDocument) -> TransformResult<GeneratedProgram> {
        let entries = self.resolve_entries(&doc.text)?;
        let text = synthesize(&self.profile, &doc.text, doc.budget, &entries);
        debug!(
            name = %doc.name,
            budget = doc.budget,
            entries = entries.len(),
            bytes = text.len(),
            "synthesized harness program"
        );
        Ok(GeneratedProgram { name: doc.name.clone(), budget: doc.budget, entries, text })
    }
}

/// Transform `doc` with the default harness profile.
pub fn transform(doc: &SourceDocument) -> TransformResult<GeneratedProgram> {
    Transformer::default().transform(doc)
}
