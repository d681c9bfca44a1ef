//! Timestamp conversions shared by the parsers and renderers.
//!
//! A seconds offset has three textual encodings here: SRT (`HH:MM:SS,mmm`),
//! VTT (`HH:MM:SS.mmm`), and the `MM:SS` display form used for timestamp
//! badges. A fourth, coarser encoding renders whole durations (`1h 2m 3s`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static SRT_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})\s*-->\s*(\d{2}):(\d{2}):(\d{2}),(\d{3})")
        .unwrap()
});

static VTT_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})\.(\d{3})\s*-->\s*(\d{2}):(\d{2}):(\d{2})\.(\d{3})")
        .unwrap()
});

/// Millisecond decomposition used by the SRT and VTT encoders.
fn split_millis(seconds: f64) -> (u64, u64, u64, u64) {
    let total_ms = (seconds * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    (hours, minutes, secs, millis)
}

/// Format a seconds offset as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Input must be non-negative and finite; that is the caller's contract for
/// every encoder in this module.
pub fn seconds_to_srt(seconds: f64) -> String {
    let (hours, minutes, secs, millis) = split_millis(seconds);
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Format a seconds offset as a VTT timestamp (`HH:MM:SS.mmm`).
pub fn seconds_to_vtt(seconds: f64) -> String {
    let (hours, minutes, secs, millis) = split_millis(seconds);
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

/// Format a seconds offset for display as `MM:SS`.
///
/// Hours are not carried into a separate field: 3700 seconds renders as
/// `61:40`. Kept for consumers of the short-clip form.
pub fn seconds_to_display(seconds: f64) -> String {
    let total = seconds as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format a whole duration as `"Xh Ym Zs"`, `"Ym Zs"`, or `"Zs"`.
pub fn seconds_to_duration(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Parse an SRT cue timing line (`HH:MM:SS,mmm --> HH:MM:SS,mmm`).
pub fn parse_srt_timestamp(line: &str) -> Result<(f64, f64)> {
    parse_range(line, &SRT_RANGE)
}

/// Parse a VTT cue timing line (`HH:MM:SS.mmm --> HH:MM:SS.mmm`).
pub fn parse_vtt_timestamp(line: &str) -> Result<(f64, f64)> {
    parse_range(line, &VTT_RANGE)
}

fn parse_range(line: &str, pattern: &Regex) -> Result<(f64, f64)> {
    let trimmed = line.trim();
    let caps = pattern
        .captures(trimmed)
        .ok_or_else(|| Error::MalformedTimestamp(trimmed.to_string()))?;

    // The pattern guarantees fixed-width ASCII digit groups.
    let field = |index: usize| caps[index].parse::<f64>().unwrap_or(0.0);
    let start = field(1) * 3600.0 + field(2) * 60.0 + field(3) + field(4) / 1000.0;
    let end = field(5) * 3600.0 + field(6) * 60.0 + field(7) + field(8) / 1000.0;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srt_encoding_pads_every_field() {
        assert_eq!(seconds_to_srt(0.0), "00:00:00,000");
        assert_eq!(seconds_to_srt(2.5), "00:00:02,500");
        assert_eq!(seconds_to_srt(3661.123), "01:01:01,123");
    }

    #[test]
    fn vtt_encoding_uses_a_period() {
        assert_eq!(seconds_to_vtt(2.5), "00:00:02.500");
        assert_eq!(seconds_to_vtt(3661.123), "01:01:01.123");
    }

    #[test]
    fn display_time_does_not_carry_hours() {
        assert_eq!(seconds_to_display(0.0), "00:00");
        assert_eq!(seconds_to_display(65.9), "01:05");
        assert_eq!(seconds_to_display(3700.0), "61:40");
    }

    #[test]
    fn duration_picks_the_coarsest_leading_unit() {
        assert_eq!(seconds_to_duration(42.0), "42s");
        assert_eq!(seconds_to_duration(100.0), "1m 40s");
        assert_eq!(seconds_to_duration(3700.0), "1h 1m 40s");
    }

    #[test]
    fn parse_srt_range() {
        let (start, end) = parse_srt_timestamp("00:00:00,000 --> 00:00:05,000").unwrap();
        assert_eq!(start, 0.0);
        assert_eq!(end, 5.0);
    }

    #[test]
    fn parse_vtt_range_rejects_comma_separator() {
        assert!(parse_vtt_timestamp("00:00:00,000 --> 00:00:05,000").is_err());
        assert!(parse_vtt_timestamp("00:00:00.000 --> 00:00:05.000").is_ok());
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_srt_timestamp("not a timestamp").unwrap_err();
        assert!(matches!(err, Error::MalformedTimestamp(_)));
    }

    #[test]
    fn srt_codec_round_trips_millisecond_values() {
        for &value in &[0.0, 0.001, 2.5, 59.999, 61.04, 3599.5, 7201.25] {
            let line = format!("{0} --> {0}", seconds_to_srt(value));
            let (start, end) = parse_srt_timestamp(&line).unwrap();
            assert!((start - value).abs() < 0.0005, "start {} != {}", start, value);
            assert!((end - value).abs() < 0.0005);
        }
    }
}
