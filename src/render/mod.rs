//! Pure renderers from the transcript model to the four artifact formats.
//!
//! Every renderer returns a string and never touches the filesystem; the
//! storage adapter owns persistence. Calls are independently reproducible
//! given the same transcript and metadata.

mod html;
mod subtitles;

pub use html::render_html;
pub use subtitles::{render_srt, render_vtt};

use crate::{Provenance, Transcript};

/// In-memory artifact set for one transcript, keyed by target format.
#[derive(Debug, Clone)]
pub struct RenderedArtifacts {
    pub txt: String,
    pub srt: String,
    pub vtt: String,
    pub html: String,
}

/// Render the plain-text artifact: the full transcript text verbatim.
pub fn render_text(transcript: &Transcript) -> String {
    transcript.text.clone()
}

/// Render all four artifacts in one pass.
pub fn render_all(
    transcript: &Transcript,
    display_title: &str,
    provenance: Option<&Provenance>,
) -> RenderedArtifacts {
    RenderedArtifacts {
        txt: render_text(transcript),
        srt: render_srt(transcript),
        vtt: render_vtt(transcript),
        html: render_html(transcript, display_title, provenance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;

    #[test]
    fn text_rendering_is_verbatim() {
        let transcript = Transcript {
            segments: vec![Segment {
                start: 0.0,
                end: 10.0,
                text: "kept as-is".to_string(),
            }],
            text: "kept\n\nas-is".to_string(),
            language: "unknown".to_string(),
        };
        assert_eq!(render_text(&transcript), "kept\n\nas-is");
    }

    #[test]
    fn render_all_produces_every_format() {
        let transcript = Transcript::from_segments(
            vec![Segment {
                start: 1.0,
                end: 2.0,
                text: "hello".to_string(),
            }],
            "en",
        );
        let artifacts = render_all(&transcript, "Demo", None);
        assert_eq!(artifacts.txt, "hello");
        assert!(artifacts.srt.starts_with("1\n00:00:01,000 --> 00:00:02,000"));
        assert!(artifacts.vtt.starts_with("WEBVTT\n\n"));
        assert!(artifacts.html.contains("Demo"));
    }
}
