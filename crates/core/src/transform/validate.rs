use crate::config::HarnessProfile;
use crate::error::{TransformError, TransformResult};

/// Reject sources that cannot be turned into a harness program.
///
/// The entry-point check runs first: a source with its own `main` fails with
/// `DuplicateEntryPoint` even when it has no markers.
pub fn validate<'a>(text: &'a str, profile: &HarnessProfile) -> TransformResult<&'a str> {
    if !profile.entry_point_signature.is_empty() {
        if let Some(offset) = text.find(&profile.entry_point_signature) {
            return Err(TransformError::DuplicateEntryPoint { offset });
        }
    }

    if profile.marker.is_empty() || !text.contains(&profile.marker) {
        return Err(TransformError::NoMarker { token: profile.marker.clone() });
    }

    Ok(text)
}
