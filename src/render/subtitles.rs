//! SRT and VTT emission.

use crate::timecode::{seconds_to_srt, seconds_to_vtt};
use crate::Transcript;

/// Render the transcript as an SRT document.
///
/// One block per segment: 1-based sequence number, timing line, trimmed text,
/// blank separator.
pub fn render_srt(transcript: &Transcript) -> String {
    let mut out = String::new();
    for (i, segment) in transcript.segments.iter().enumerate() {
        out.push_str(&format!("{}\n", i + 1));
        out.push_str(&format!(
            "{} --> {}\n",
            seconds_to_srt(segment.start),
            seconds_to_srt(segment.end)
        ));
        out.push_str(segment.text.trim());
        out.push_str("\n\n");
    }
    out
}

/// Render the transcript as a WebVTT document.
///
/// `WEBVTT` header, blank line, then one cue per segment. No cue identifiers
/// are emitted.
pub fn render_vtt(transcript: &Transcript) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for segment in &transcript.segments {
        out.push_str(&format!(
            "{} --> {}\n",
            seconds_to_vtt(segment.start),
            seconds_to_vtt(segment.end)
        ));
        out.push_str(segment.text.trim());
        out.push_str("\n\n");
    }
    out
}
