//! Job orchestration: acquire a source, obtain a transcript, render and
//! persist all four artifacts.
//!
//! The pipeline is single-job, synchronous, and blocking; steps run strictly
//! sequentially with no retries. Recognition and media acquisition are
//! pluggable collaborators behind traits so the core stays testable without a
//! model or network access.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::filename::sanitize_title;
use crate::parsers::{parse_text, parse_vtt, TranscriptFormat};
use crate::render::render_all;
use crate::storage::{write_artifacts, ArtifactPaths};
use crate::{Provenance, Transcript};

/// Maximum characters carried in the outcome preview.
pub const PREVIEW_CHARS: usize = 500;

/// Speech-recognition collaborator: audio in, transcript out.
pub trait SpeechRecognizer {
    /// Transcribe the media file, optionally forcing a language.
    fn recognize(&mut self, media_path: &Path, language: Option<&str>) -> Result<Transcript>;
}

/// Captions fetched ahead of any transcription work.
#[derive(Debug, Clone)]
pub struct CaptionDownload {
    pub caption_path: PathBuf,
    pub title: String,
    pub author: String,
}

/// Downloaded media ready for recognition.
#[derive(Debug, Clone)]
pub struct MediaDownload {
    pub media_path: PathBuf,
    pub title: String,
    pub author: String,
    pub duration_seconds: f64,
}

/// Remote media acquisition collaborator.
pub trait MediaProvider {
    /// Probe for pre-extracted captions. `Ok(None)` means none exist; an
    /// error here is treated as "none" by the orchestrator, which falls back
    /// to downloading the audio.
    fn fetch_captions(&self, url: &str) -> Result<Option<CaptionDownload>>;

    /// Download the audio track for recognition.
    fn download_audio(&self, url: &str) -> Result<MediaDownload>;
}

/// One incoming job, tagged by source kind.
#[derive(Debug, Clone)]
pub enum JobRequest {
    /// A local media file, already on disk.
    MediaFile {
        path: PathBuf,
        title: String,
        language: Option<String>,
    },
    /// A remote video URL; captions first, recognition as fallback.
    VideoUrl {
        url: String,
        language: Option<String>,
    },
    /// An existing transcript file with its declared format.
    TranscriptFile {
        path: PathBuf,
        format: TranscriptFormat,
        title: String,
        provenance: Option<Provenance>,
    },
    /// Edited or pasted plain text.
    EditedText {
        text: String,
        title: String,
        provenance: Option<Provenance>,
    },
}

/// How the transcript was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Captions,
    Recognition,
    Transcript,
}

/// Terminal state of a successful job.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    pub files: ArtifactPaths,
    pub title: String,
    pub preview: String,
    pub full_text: String,
    pub source: SourceKind,
}

/// Sequences one job from source acquisition through artifact writes.
pub struct Pipeline {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    provider: Option<Box<dyn MediaProvider>>,
    output_dir: PathBuf,
}

impl Pipeline {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            recognizer: None,
            provider: None,
            output_dir: output_dir.into(),
        }
    }

    /// Attach the recognition collaborator used for media sources.
    pub fn with_recognizer(mut self, recognizer: impl SpeechRecognizer + 'static) -> Self {
        self.recognizer = Some(Box::new(recognizer));
        self
    }

    /// Attach the media-acquisition collaborator used for URL sources.
    pub fn with_provider(mut self, provider: impl MediaProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Run one job to its terminal state. Collaborator and I/O failures abort
    /// the job and surface the underlying message verbatim.
    pub fn run(&mut self, request: JobRequest) -> Result<JobOutcome> {
        match request {
            JobRequest::MediaFile {
                path,
                title,
                language,
            } => self.run_media_file(&path, &title, language.as_deref()),
            JobRequest::VideoUrl { url, language } => {
                self.run_video_url(&url, language.as_deref())
            }
            JobRequest::TranscriptFile {
                path,
                format,
                title,
                provenance,
            } => self.run_transcript_file(&path, format, &title, provenance),
            JobRequest::EditedText {
                text,
                title,
                provenance,
            } => self.run_edited_text(&text, &title, provenance),
        }
    }

    fn run_media_file(
        &mut self,
        path: &Path,
        title: &str,
        language: Option<&str>,
    ) -> Result<JobOutcome> {
        log::info!("transcribing uploaded media {}", path.display());
        let transcript = self.recognizer_mut()?.recognize(path, language)?;
        self.finish(transcript, title, None, SourceKind::Recognition)
    }

    fn run_video_url(&mut self, url: &str, language: Option<&str>) -> Result<JobOutcome> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| Error::Download("no media provider configured".to_string()))?;

        // Captions fast path. A failed probe is logged and treated as absent.
        match provider.fetch_captions(url) {
            Ok(Some(captions)) => {
                log::info!("using existing captions for {}", url);
                let content = fs::read_to_string(&captions.caption_path)?;
                let transcript = parse_vtt(&content)?;
                let provenance = Provenance {
                    url: Some(url.to_string()),
                    author: Some(captions.author.clone()),
                    title: Some(captions.title.clone()),
                };
                return self.finish(
                    transcript,
                    &captions.title,
                    Some(provenance),
                    SourceKind::Captions,
                );
            }
            Ok(None) => log::info!("no captions for {}, falling back to recognition", url),
            Err(err) => log::warn!("caption probe failed ({}), falling back to recognition", err),
        }

        let download = provider.download_audio(url)?;
        log::info!(
            "downloaded {} ({}s) for recognition",
            download.title,
            download.duration_seconds
        );
        let transcript = self
            .recognizer_mut()?
            .recognize(&download.media_path, language)?;
        let provenance = Provenance {
            url: Some(url.to_string()),
            author: Some(download.author.clone()),
            title: Some(download.title.clone()),
        };
        self.finish(
            transcript,
            &download.title,
            Some(provenance),
            SourceKind::Recognition,
        )
    }

    fn run_transcript_file(
        &mut self,
        path: &Path,
        format: TranscriptFormat,
        title: &str,
        provenance: Option<Provenance>,
    ) -> Result<JobOutcome> {
        log::info!("converting transcript file {}", path.display());
        let content = fs::read_to_string(path)?;
        let transcript = format.parse(&content)?;
        self.finish(transcript, title, provenance, SourceKind::Transcript)
    }

    fn run_edited_text(
        &mut self,
        text: &str,
        title: &str,
        provenance: Option<Provenance>,
    ) -> Result<JobOutcome> {
        let transcript = parse_text(text)?;
        self.finish(transcript, title, provenance, SourceKind::Transcript)
    }

    fn recognizer_mut(&mut self) -> Result<&mut Box<dyn SpeechRecognizer>> {
        self.recognizer
            .as_mut()
            .ok_or_else(|| Error::Recognition("no speech recognizer configured".to_string()))
    }

    fn finish(
        &self,
        transcript: Transcript,
        raw_title: &str,
        provenance: Option<Provenance>,
        source: SourceKind,
    ) -> Result<JobOutcome> {
        let title = sanitize_title(raw_title);
        let artifacts = render_all(&transcript, &title, provenance.as_ref());
        let files = write_artifacts(&self.output_dir, &title, &artifacts)?;
        Ok(JobOutcome {
            files,
            title,
            preview: preview(&transcript.text),
            full_text: transcript.text,
            source,
        })
    }
}

/// First `PREVIEW_CHARS` characters of the text, with a trailing ellipsis
/// marker only when truncation occurred.
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(PREVIEW_CHARS).collect();
        shortened.push_str("...");
        shortened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn preview_truncates_at_the_char_limit() {
        let text = "a".repeat(PREVIEW_CHARS + 1);
        let result = preview(&text);
        assert_eq!(result.chars().count(), PREVIEW_CHARS + 3);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn preview_respects_multibyte_boundaries() {
        let text = "é".repeat(PREVIEW_CHARS + 10);
        let result = preview(&text);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn exact_limit_is_left_alone() {
        let text = "b".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&text), text);
    }
}
