//! Bundled speech-recognition collaborators.
//!
//! The pipeline only depends on the `SpeechRecognizer` trait; everything in
//! here is a convenience implementation, not part of the core contract.
//!
//! # Whisper
//!
//! OpenAI's Whisper via `whisper-rs`:
//! - **Model format**: single GGML file (`.bin`), e.g. `whisper-base-q4_1.bin`
//! - **Input**: 16 kHz mono 16-bit PCM WAV (see [`crate::audio`])
//! - **Output**: full text plus centisecond-resolution segments and the
//!   detected language

#[cfg(feature = "whisper")]
pub mod whisper;
