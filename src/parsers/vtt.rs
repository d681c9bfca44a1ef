//! WebVTT cue parser.

use super::{fallback_transcript, split_blocks};
use crate::error::{Error, Result};
use crate::timecode::parse_vtt_timestamp;
use crate::{Segment, Transcript, UNKNOWN_LANGUAGE};

/// Parse a WebVTT document into the shared transcript model.
///
/// The `WEBVTT` header (with any metadata lines up to the first blank line) is
/// stripped when present. Within a block the timing line may sit on line 0 or
/// line 1, tolerating an optional leading cue identifier. Blocks with no
/// `-->` on either candidate line, or whose timing fails the VTT pattern, are
/// dropped.
pub fn parse_vtt(input: &str) -> Result<Transcript> {
    let normalized = input.replace("\r\n", "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut segments = Vec::new();
    for block in split_blocks(strip_header(&normalized)) {
        let lines: Vec<&str> = block.lines().collect();
        if lines.len() < 2 {
            continue;
        }
        let (timing_line, text_start) = if lines[0].contains("-->") {
            (lines[0], 1)
        } else if lines[1].contains("-->") {
            (lines[1], 2)
        } else {
            continue;
        };
        match parse_vtt_timestamp(timing_line) {
            Ok((start, end)) => {
                let text = lines[text_start..].join(" ").trim().to_string();
                segments.push(Segment { start, end, text });
            }
            Err(_) => {
                log::debug!("dropping VTT cue with unparsable timing: {:?}", timing_line);
            }
        }
    }

    if segments.is_empty() {
        return Ok(fallback_transcript(trimmed));
    }
    Ok(Transcript::from_segments(segments, UNKNOWN_LANGUAGE))
}

/// Strip a leading `WEBVTT` header through the first blank line.
///
/// A header never closed by a blank line is left in place; block parsing
/// skips it naturally.
fn strip_header(content: &str) -> &str {
    if let Some(rest) = content.strip_prefix("WEBVTT") {
        match rest.find("\n\n") {
            Some(idx) => &rest[idx + 2..],
            None => content,
        }
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cues_after_the_header() {
        let input = "WEBVTT\n\n00:00:00.000 --> 00:00:02.500\nHello world\n\n00:00:02.500 --> 00:00:05.000\nGoodbye\n";
        let transcript = parse_vtt(input).unwrap();
        assert_eq!(transcript.segments.len(), 2);
        assert_eq!(transcript.text, "Hello world Goodbye");
        assert_eq!(transcript.language, "unknown");
    }

    #[test]
    fn header_metadata_lines_are_stripped() {
        let input = "WEBVTT\nKind: captions\nLanguage: en\n\n00:00:01.000 --> 00:00:02.000\ncue text\n";
        let transcript = parse_vtt(input).unwrap();
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.segments[0].text, "cue text");
    }

    #[test]
    fn cue_identifier_is_tolerated() {
        let with_id = "WEBVTT\n\nintro-cue\n00:00:01.000 --> 00:00:02.000\nsame text\n";
        let without_id = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nsame text\n";
        let a = parse_vtt(with_id).unwrap();
        let b = parse_vtt(without_id).unwrap();
        assert_eq!(a.segments, b.segments);
    }

    #[test]
    fn multiline_cue_text_is_space_joined() {
        let input = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nline one\nline two\n";
        let transcript = parse_vtt(input).unwrap();
        assert_eq!(transcript.segments[0].text, "line one line two");
    }

    #[test]
    fn blocks_without_an_arrow_are_dropped() {
        let input = "WEBVTT\n\nNOTE\nthis is a comment\n\n00:00:01.000 --> 00:00:02.000\nkept\n";
        let transcript = parse_vtt(input).unwrap();
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.text, "kept");
    }

    #[test]
    fn srt_style_commas_are_rejected_cues() {
        let input = "WEBVTT\n\n00:00:01,000 --> 00:00:02,000\nwrong separator\n\n00:00:02.000 --> 00:00:03.000\nright separator\n";
        let transcript = parse_vtt(input).unwrap();
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.segments[0].text, "right separator");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_vtt(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn header_only_input_degrades_to_one_segment() {
        let transcript = parse_vtt("WEBVTT\n\n").unwrap();
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.text, "WEBVTT");
    }
}
