//! Freeform text parser.

use crate::error::{Error, Result};
use crate::{Segment, Transcript, UNKNOWN_LANGUAGE};

/// Spacing of the placeholder time axis, in seconds per paragraph.
const PLACEHOLDER_SPACING: f64 = 10.0;

/// Parse plain text with no timing information.
///
/// Paragraphs split on blank-line boundaries; with no boundary the whole text
/// is one paragraph. Each paragraph becomes a segment on a synthetic
/// 10-second axis so downstream renderers always have a segment list to walk.
/// The full text stays the literal trimmed input, not a re-join of the
/// synthesized segments; the two views may disagree on paragraph boundaries.
pub fn parse_text(input: &str) -> Result<Transcript> {
    let normalized = input.replace("\r\n", "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut paragraphs: Vec<&str> = trimmed
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if paragraphs.is_empty() {
        paragraphs.push(trimmed);
    }

    let segments = paragraphs
        .into_iter()
        .enumerate()
        .map(|(i, paragraph)| Segment {
            start: i as f64 * PLACEHOLDER_SPACING,
            end: (i + 1) as f64 * PLACEHOLDER_SPACING,
            text: paragraph.to_string(),
        })
        .collect();

    Ok(Transcript {
        segments,
        text: trimmed.to_string(),
        language: UNKNOWN_LANGUAGE.to_string(),
    })
}
