//! Source-format parsers producing the shared transcript model.
//!
//! Three independent parsers cover the supported source documents: SRT
//! subtitle blocks, VTT cue blocks (tolerant of the header line and optional
//! cue identifiers), and freeform text with no timing at all. All three are
//! permissive: a malformed block is dropped, never fatal, and the only error
//! is structurally empty input.

mod srt;
mod text;
mod vtt;

use std::str::FromStr;

pub use srt::parse_srt;
pub use text::parse_text;
pub use vtt::parse_vtt;

use crate::error::Result;
use crate::{Segment, Transcript, UNKNOWN_LANGUAGE};

/// Source format tag, selected explicitly by the caller.
///
/// Extension mapping lives in `FromStr` for glue layers; the core never
/// inspects file names to pick a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    Srt,
    Vtt,
    PlainText,
}

impl TranscriptFormat {
    /// Run the parser matching this tag.
    pub fn parse(self, input: &str) -> Result<Transcript> {
        match self {
            TranscriptFormat::Srt => parse_srt(input),
            TranscriptFormat::Vtt => parse_vtt(input),
            TranscriptFormat::PlainText => parse_text(input),
        }
    }
}

impl FromStr for TranscriptFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "srt" => Ok(TranscriptFormat::Srt),
            "vtt" | "webvtt" => Ok(TranscriptFormat::Vtt),
            "txt" | "text" => Ok(TranscriptFormat::PlainText),
            other => Err(format!("unknown transcript format: {}. Use srt, vtt, or txt.", other)),
        }
    }
}

/// Split a document into blocks separated by blank-line runs.
fn split_blocks(content: &str) -> Vec<&str> {
    content
        .trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Degenerate result for non-empty input with zero usable blocks: one
/// synthetic segment wrapping the whole text, on the same placeholder axis
/// the freeform parser uses.
fn fallback_transcript(trimmed: &str) -> Transcript {
    Transcript {
        segments: vec![Segment {
            start: 0.0,
            end: 10.0,
            text: trimmed.to_string(),
        }],
        text: trimmed.to_string(),
        language: UNKNOWN_LANGUAGE.to_string(),
    }
}
