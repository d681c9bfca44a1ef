//! Thin persistence adapter for rendered artifacts.
//!
//! Rendering is pure; this module owns the only filesystem writes in the
//! crate. The four writes are independent and order-insensitive, with no
//! transaction across them: a crash mid-way leaves a partial artifact set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::filename::to_identifier;
use crate::render::RenderedArtifacts;

/// On-disk locations of one job's rendered artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactPaths {
    pub txt: PathBuf,
    pub srt: PathBuf,
    pub vtt: PathBuf,
    pub html: PathBuf,
}

impl ArtifactPaths {
    /// Iterate the set as `(format key, path)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Path)> {
        [
            ("txt", self.txt.as_path()),
            ("srt", self.srt.as_path()),
            ("vtt", self.vtt.as_path()),
            ("html", self.html.as_path()),
        ]
        .into_iter()
    }
}

/// Write all four artifacts under `output_dir`.
///
/// The base name for every file is `to_identifier(display_title)`; a title
/// that normalizes to nothing is refused rather than written to an empty
/// path.
pub fn write_artifacts(
    output_dir: &Path,
    display_title: &str,
    artifacts: &RenderedArtifacts,
) -> Result<ArtifactPaths> {
    let base = to_identifier(display_title);
    if base.is_empty() {
        return Err(Error::EmptyTitle);
    }

    fs::create_dir_all(output_dir)?;
    let paths = ArtifactPaths {
        txt: output_dir.join(format!("{}.txt", base)),
        srt: output_dir.join(format!("{}.srt", base)),
        vtt: output_dir.join(format!("{}.vtt", base)),
        html: output_dir.join(format!("{}.html", base)),
    };

    fs::write(&paths.txt, &artifacts.txt)?;
    fs::write(&paths.srt, &artifacts.srt)?;
    fs::write(&paths.vtt, &artifacts.vtt)?;
    fs::write(&paths.html, &artifacts.html)?;
    log::info!(
        "wrote artifacts {} under {}",
        base,
        output_dir.display()
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts() -> RenderedArtifacts {
        RenderedArtifacts {
            txt: "plain".to_string(),
            srt: "1\n00:00:00,000 --> 00:00:01,000\nplain\n\n".to_string(),
            vtt: "WEBVTT\n\n".to_string(),
            html: "<!DOCTYPE html>".to_string(),
        }
    }

    #[test]
    fn writes_all_four_formats_under_the_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(dir.path(), "My Video: Intro!", &artifacts()).unwrap();

        assert_eq!(paths.txt, dir.path().join("MyVideoIntro.txt"));
        assert_eq!(std::fs::read_to_string(&paths.txt).unwrap(), "plain");
        for (_, path) in paths.iter() {
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn creates_missing_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let paths = write_artifacts(&nested, "Clip", &artifacts()).unwrap();
        assert!(paths.html.exists());
    }

    #[test]
    fn refuses_titles_that_normalize_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_artifacts(dir.path(), "!!!", &artifacts()).unwrap_err();
        assert!(matches!(err, Error::EmptyTitle));
    }
}
