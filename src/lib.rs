pub mod audio;
pub mod engines;
pub mod error;
pub mod fetch;
pub mod filename;
pub mod paragraphs;
pub mod parsers;
pub mod pipeline;
pub mod render;
pub mod storage;
pub mod timecode;

use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// Language value used when a source format carries no language information.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// One spoken unit with its position on the time axis.
///
/// Ordering is caller-supplied and significant. Segments are assumed
/// non-overlapping with non-decreasing starts; this is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Shared transcript representation produced by every parser and recognizer.
///
/// `text` is semantically the space-join of the segment texts in order. The one
/// exception is freeform input, where `text` stays the literal original string
/// while the segments are synthetic evenly-spaced slices of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub segments: Vec<Segment>,
    pub text: String,
    pub language: String,
}

impl Transcript {
    /// Build a transcript whose full text is the space-join of its segments.
    pub fn from_segments(segments: Vec<Segment>, language: impl Into<String>) -> Self {
        let text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            segments,
            text,
            language: language.into(),
        }
    }

    /// Whether the segments carry real timing rather than fabricated spacing.
    ///
    /// Fabricated time axes start at zero, so a non-zero first start is taken
    /// as real timing. Only used to decide timestamp display in HTML.
    pub fn has_timestamps(&self) -> bool {
        self.segments.first().map_or(false, |s| s.start > 0.0)
    }

    /// End of the last segment, or zero for an empty transcript.
    pub fn duration_seconds(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end)
    }
}

/// Metadata describing the remote video a transcript came from.
///
/// Attached only when the source was a remote video; purely additive and never
/// required for parsing or rendering correctness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub url: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
}
