use std::fmt;

use thiserror::Error;

/// Why a marker could not be resolved to a test entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The marker line never ends; no line break follows the label.
    MissingLineBreak,
    /// No space follows the label line, so no declaration can start.
    MissingDeclaration,
    /// The declaration has no opening parenthesis before the end of text.
    MissingParen,
    /// The text between the declaration space and `(` names nothing.
    EmptyFunctionName,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MalformedReason::MissingLineBreak => "no line break after the marker label",
            MalformedReason::MissingDeclaration => "no function declaration after the marker",
            MalformedReason::MissingParen => "no '(' after the function name",
            MalformedReason::EmptyFunctionName => "empty function name",
        };
        f.write_str(text)
    }
}

/// Error type for the source transformer.
///
/// Every variant is an input-correctness problem; none of them are transient.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The source already defines an entry point, so no harness `main` can be added.
    #[error("source already defines an entry point at byte {offset}")]
    DuplicateEntryPoint { offset: usize },

    /// The marker token does not occur anywhere in the source.
    #[error("no test marker found; write \"{token} [NAME-OF-TEST]\" above the function to measure")]
    NoMarker { token: String },

    /// A marker was found but the label/declaration that should follow it was not.
    #[error("marker #{index} at byte {offset} is malformed: {reason}")]
    MalformedMarker { index: usize, offset: usize, reason: MalformedReason },
}

/// Convenience result type for transformer operations.
pub type TransformResult<T> = Result<T, TransformError>;
