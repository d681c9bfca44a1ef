//! Remote media acquisition backed by the `yt-dlp` executable.
//!
//! Probes a video URL for pre-extracted English captions first (the cheap
//! path), and downloads the audio track for recognition otherwise. Metadata
//! comes from `yt-dlp --dump-json`; downloads use an id-based output template
//! so the resulting file names are predictable without re-querying.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pipeline::{CaptionDownload, MediaDownload, MediaProvider};

static YOUTUBE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+").unwrap());

/// Whether a URL points at a YouTube video page.
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}

#[derive(Debug, Deserialize)]
struct VideoMetadata {
    id: String,
    title: Option<String>,
    duration: Option<f64>,
    uploader: Option<String>,
    channel: Option<String>,
    #[serde(default)]
    subtitles: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    automatic_captions: serde_json::Map<String, serde_json::Value>,
}

impl VideoMetadata {
    fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| "unknown".to_string())
    }

    fn author(&self) -> String {
        self.uploader
            .clone()
            .or_else(|| self.channel.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    fn has_english_captions(&self) -> bool {
        self.subtitles.contains_key("en") || self.automatic_captions.contains_key("en")
    }
}

/// `MediaProvider` implementation shelling out to `yt-dlp`.
pub struct YtDlpProvider {
    executable: PathBuf,
    download_dir: PathBuf,
}

impl YtDlpProvider {
    /// Use the `yt-dlp` found on `PATH`, downloading into `download_dir`.
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: PathBuf::from("yt-dlp"),
            download_dir: download_dir.into(),
        }
    }

    /// Override the executable location.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    fn probe(&self, url: &str) -> Result<VideoMetadata> {
        let output = self
            .command()
            .args(["--dump-json", "--no-warnings", url])
            .output()
            .map_err(|err| Error::Download(format!("failed to run yt-dlp: {}", err)))?;
        if !output.status.success() {
            return Err(Error::Download(format!(
                "yt-dlp exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        serde_json::from_slice(&output.stdout)
            .map_err(|err| Error::Download(format!("unreadable yt-dlp metadata: {}", err)))
    }

    fn command(&self) -> Command {
        Command::new(&self.executable)
    }

    fn output_template(&self) -> String {
        self.download_dir
            .join("%(id)s.%(ext)s")
            .to_string_lossy()
            .into_owned()
    }

    fn run(&self, args: &[&str], url: &str) -> Result<()> {
        let template = self.output_template();
        let output = self
            .command()
            .args(args)
            .args(["--no-warnings", "-o", template.as_str(), url])
            .output()
            .map_err(|err| Error::Download(format!("failed to run yt-dlp: {}", err)))?;
        if !output.status.success() {
            return Err(Error::Download(format!(
                "yt-dlp exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

impl MediaProvider for YtDlpProvider {
    fn fetch_captions(&self, url: &str) -> Result<Option<CaptionDownload>> {
        let metadata = self.probe(url)?;
        if !metadata.has_english_captions() {
            log::info!("no English captions listed for {}", url);
            return Ok(None);
        }

        fs::create_dir_all(&self.download_dir)?;
        self.run(
            &[
                "--skip-download",
                "--write-subs",
                "--write-auto-subs",
                "--sub-langs",
                "en",
                "--sub-format",
                "vtt",
            ],
            url,
        )?;

        let caption_path = self.download_dir.join(format!("{}.en.vtt", metadata.id));
        if !caption_path.exists() {
            log::info!("caption download produced no file for {}", url);
            return Ok(None);
        }

        log::info!("downloaded captions for {} ({})", metadata.title(), url);
        Ok(Some(CaptionDownload {
            caption_path,
            title: metadata.title(),
            author: metadata.author(),
        }))
    }

    fn download_audio(&self, url: &str) -> Result<MediaDownload> {
        let metadata = self.probe(url)?;
        fs::create_dir_all(&self.download_dir)?;

        // The recognizer consumes 16 kHz mono PCM, so ask yt-dlp's ffmpeg
        // post-processor for exactly that instead of a listening-quality mp3.
        self.run(
            &[
                "-f",
                "bestaudio/best",
                "-x",
                "--audio-format",
                "wav",
                "--postprocessor-args",
                "ffmpeg:-ar 16000 -ac 1",
            ],
            url,
        )?;

        let media_path = self.download_dir.join(format!("{}.wav", metadata.id));
        if !media_path.exists() {
            return Err(Error::Download(format!(
                "yt-dlp did not produce an audio file for {}",
                url
            )));
        }

        log::info!("downloaded audio for {} ({})", metadata.title(), url);
        Ok(MediaDownload {
            media_path,
            title: metadata.title(),
            author: metadata.author(),
            duration_seconds: metadata.duration.unwrap_or(0.0),
        })
    }
}
