//! Audio ingestion for the bundled recognizer.
//!
//! Whisper consumes 16 kHz mono 16-bit PCM. `read_wav_samples` validates that
//! format and normalizes samples to `[-1.0, 1.0]`; anything else is reported
//! as a recognition failure since the media cannot be transcribed as-is.

use std::path::Path;

use crate::error::{Error, Result};

/// Sample rate the recognizer expects, in Hz.
pub const SAMPLE_RATE: u32 = 16_000;

/// Read a WAV file into normalized f32 samples.
///
/// The file must be 16 kHz, 16-bit integer PCM, mono. Callers converting
/// arbitrary media are expected to resample before handing the file over
/// (the bundled media provider requests exactly this format from yt-dlp).
pub fn read_wav_samples(wav_path: &Path) -> Result<Vec<f32>> {
    let mut reader = open(wav_path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(Error::Recognition(format!(
            "expected mono audio, found {} channels in {}",
            spec.channels,
            wav_path.display()
        )));
    }
    if spec.sample_rate != SAMPLE_RATE {
        return Err(Error::Recognition(format!(
            "expected {} Hz sample rate, found {} Hz in {}",
            SAMPLE_RATE,
            spec.sample_rate,
            wav_path.display()
        )));
    }
    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        return Err(Error::Recognition(format!(
            "expected 16-bit integer PCM, found {}-bit {:?} in {}",
            spec.bits_per_sample,
            spec.sample_format,
            wav_path.display()
        )));
    }

    reader
        .samples::<i16>()
        .map(|sample| {
            sample
                .map(|value| value as f32 / i16::MAX as f32)
                .map_err(|err| Error::Recognition(format!("bad sample data: {}", err)))
        })
        .collect()
}

/// Duration of a WAV file in seconds, for job metadata.
pub fn wav_duration_seconds(wav_path: &Path) -> Result<f64> {
    let reader = open(wav_path)?;
    let spec = reader.spec();
    Ok(reader.duration() as f64 / spec.sample_rate as f64)
}

fn open(wav_path: &Path) -> Result<hound::WavReader<std::io::BufReader<std::fs::File>>> {
    hound::WavReader::open(wav_path)
        .map_err(|err| Error::Recognition(format!("cannot open {}: {}", wav_path.display(), err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn normalizes_the_full_sample_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extremes.wav");
        write_wav(&path, SAMPLE_RATE, 1, &[i16::MAX, 0, i16::MIN]);

        let samples = read_wav_samples(&path).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 1.0);
        assert_eq!(samples[1], 0.0);
        assert!(samples[2] <= -1.0);
    }

    #[test]
    fn rejects_wrong_sample_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("44k.wav");
        write_wav(&path, 44_100, 1, &[0, 0]);

        let err = read_wav_samples(&path).unwrap_err();
        assert!(matches!(err, Error::Recognition(_)));
        assert!(err.to_string().contains("44100"));
    }

    #[test]
    fn rejects_stereo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, SAMPLE_RATE, 2, &[0, 0]);

        assert!(read_wav_samples(&path).is_err());
    }

    #[test]
    fn reports_duration_from_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one-second.wav");
        write_wav(&path, SAMPLE_RATE, 1, &vec![0; SAMPLE_RATE as usize]);

        let duration = wav_duration_seconds(&path).unwrap();
        assert!((duration - 1.0).abs() < f64::EPSILON);
    }
}
