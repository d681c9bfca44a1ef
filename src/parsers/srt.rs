//! SRT (SubRip) subtitle parser.

use super::{fallback_transcript, split_blocks};
use crate::error::{Error, Result};
use crate::timecode::parse_srt_timestamp;
use crate::{Segment, Transcript, UNKNOWN_LANGUAGE};

/// Parse an SRT document into the shared transcript model.
///
/// A block qualifies when it has at least three lines: the sequence number,
/// the timing line, and one or more text lines (space-joined). Blocks whose
/// timing line does not match the SRT pattern are dropped. SRT carries no
/// language tag, so the result language is always `"unknown"`.
pub fn parse_srt(input: &str) -> Result<Transcript> {
    let normalized = input.replace("\r\n", "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut segments = Vec::new();
    for block in split_blocks(trimmed) {
        let lines: Vec<&str> = block.lines().collect();
        if lines.len() < 3 {
            continue;
        }
        match parse_srt_timestamp(lines[1]) {
            Ok((start, end)) => {
                let text = lines[2..].join(" ").trim().to_string();
                segments.push(Segment { start, end, text });
            }
            Err(_) => {
                log::debug!("dropping SRT block with unparsable timing: {:?}", lines[1]);
            }
        }
    }

    if segments.is_empty() {
        return Ok(fallback_transcript(trimmed));
    }
    Ok(Transcript::from_segments(segments, UNKNOWN_LANGUAGE))
}
