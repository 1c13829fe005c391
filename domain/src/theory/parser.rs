//! Parsing theory visualizations from oracle responses.
//!
//! The oracle is asked for `application/json` output, but replies still
//! occasionally arrive wrapped in a markdown code fence. Parsing is
//! all-or-nothing: either the payload deserializes and satisfies every
//! shape invariant, or the whole query fails with a [`TheoryDataError`].

use crate::theory::entities::Visualization;
use thiserror::Error;

/// Why a theory payload could not be turned into a [`Visualization`]
#[derive(Debug, Error)]
pub enum TheoryDataError {
    #[error("response contained no theory data")]
    EmptyPayload,

    #[error("theory payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("theory payload has no notes to highlight")]
    NoNotes,

    #[error("theory payload has {notes} notes but {intervals} interval labels")]
    MismatchedIntervals { notes: usize, intervals: usize },
}

/// Parse the oracle's raw text into a [`Visualization`].
///
/// Accepts either bare JSON or JSON wrapped in a single ` ```json ` fence.
/// Enforces that at least one note is present and that `notes` and
/// `intervals` have equal length, so a caller never sees half-valid data.
pub fn parse_visualization(text: &str) -> Result<Visualization, TheoryDataError> {
    let payload = strip_code_fence(text);
    if payload.is_empty() {
        return Err(TheoryDataError::EmptyPayload);
    }

    let visualization: Visualization = serde_json::from_str(payload)?;

    if visualization.notes.is_empty() {
        return Err(TheoryDataError::NoNotes);
    }
    if visualization.notes.len() != visualization.intervals.len() {
        return Err(TheoryDataError::MismatchedIntervals {
            notes: visualization.notes.len(),
            intervals: visualization.intervals.len(),
        });
    }

    Ok(visualization)
}

/// Remove a surrounding markdown fence, including an optional `json` tag.
///
/// Anything that is not a complete fence is returned trimmed but otherwise
/// untouched, so `serde_json` reports the real problem.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(inner) = trimmed.strip_prefix("```") {
        if let Some(inner) = inner.strip_suffix("```") {
            // The opening fence line may carry a language tag
            let inner = inner.strip_prefix("json").unwrap_or(inner);
            return inner.trim();
        }
    }
    trimmed
}
