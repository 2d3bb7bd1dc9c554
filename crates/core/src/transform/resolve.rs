use tracing::debug;

use crate::error::{MalformedReason, TransformError, TransformResult};
use crate::model::{Marker, TestEntry};
use crate::transform::cursor::Cursor;

/// Resolve one marker into its test entry.
///
/// Layout expected after the marker token:
///
/// ```text
/// // ~TC-TEST~ optional label\n
/// <return-type> <name>(...
/// ```
///
/// The declaration span runs from the first space after the label line to the
/// next `(`; the function name is the last whitespace-separated token in it.
/// This is a lexical heuristic only: pointer/reference declarators and
/// multi-line signatures are not understood.
pub fn resolve(text: &str, marker: Marker, token: &str) -> TransformResult<TestEntry> {
    let malformed = |reason| TransformError::MalformedMarker {
        index: marker.index,
        offset: marker.offset,
        reason,
    };

    let mut cursor = Cursor::new(text);
    cursor
        .seek(marker.offset)
        .and_then(|_| cursor.advance(token.len()))
        .ok_or(malformed(MalformedReason::MissingLineBreak))?;

    // Label: from the first non-space to the end of the marker line.
    let label_start = cursor.skip_while(|c| c == ' ');
    let label_end = cursor.find("\n").ok_or(malformed(MalformedReason::MissingLineBreak))?;
    let label = cursor
        .slice(label_start, label_end)
        .map(str::trim_end)
        .filter(|label| !label.is_empty())
        .map(str::to_string);

    // Declaration: first space after the label line, then the next '('.
    cursor.seek(label_end + 1).ok_or(malformed(MalformedReason::MissingDeclaration))?;
    let decl_start = cursor.find(" ").ok_or(malformed(MalformedReason::MissingDeclaration))?;
    cursor.seek(decl_start + 1).ok_or(malformed(MalformedReason::MissingDeclaration))?;
    let paren = cursor.find("(").ok_or(malformed(MalformedReason::MissingParen))?;

    let function_name = cursor
        .slice(decl_start + 1, paren)
        .and_then(|span| span.split_whitespace().last())
        .ok_or(malformed(MalformedReason::EmptyFunctionName))?;

    let entry = TestEntry::new(label, function_name);
    debug!(
        index = marker.index,
        offset = marker.offset,
        test = %entry.test_name,
        function = %entry.function_name,
        "resolved marker"
    );
    Ok(entry)
}
