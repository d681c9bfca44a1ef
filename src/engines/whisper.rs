use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::read_wav_samples;
use crate::error::{Error, Result};
use crate::pipeline::SpeechRecognizer;
use crate::{Segment, Transcript, UNKNOWN_LANGUAGE};

/// Inference tuning for the Whisper recognizer.
#[derive(Debug, Clone)]
pub struct WhisperParams {
    /// Forced language code (e.g. "en"); `None` lets the model detect it.
    pub language: Option<String>,
    pub suppress_blank: bool,
    pub suppress_non_speech_tokens: bool,
    pub no_speech_thold: f32,
}

impl Default for WhisperParams {
    fn default() -> Self {
        Self {
            language: None,
            suppress_blank: true,
            suppress_non_speech_tokens: true,
            no_speech_thold: 0.2,
        }
    }
}

/// Whisper-backed implementation of the recognition collaborator.
///
/// Holds the loaded model context and its inference state between jobs;
/// loading is the expensive step and models are reused across calls.
pub struct WhisperRecognizer {
    loaded_model_path: Option<PathBuf>,
    context: Option<WhisperContext>,
    state: Option<whisper_rs::WhisperState>,
    params: WhisperParams,
}

impl WhisperRecognizer {
    pub fn new() -> Self {
        Self::with_params(WhisperParams::default())
    }

    pub fn with_params(params: WhisperParams) -> Self {
        Self {
            loaded_model_path: None,
            context: None,
            state: None,
            params,
        }
    }

    /// Load a GGML model file and prepare an inference state.
    pub fn load_model(&mut self, model_path: &Path) -> Result<()> {
        let path_str = model_path.to_str().ok_or_else(|| {
            Error::Recognition(format!(
                "model path is not valid UTF-8: {}",
                model_path.display()
            ))
        })?;

        let context =
            WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
                .map_err(|err| Error::Recognition(format!("failed to load model: {}", err)))?;
        let state = context
            .create_state()
            .map_err(|err| Error::Recognition(format!("failed to create state: {}", err)))?;

        self.context = Some(context);
        self.state = Some(state);
        self.loaded_model_path = Some(model_path.to_path_buf());
        log::info!("loaded whisper model {}", model_path.display());
        Ok(())
    }

    pub fn unload_model(&mut self) {
        self.loaded_model_path = None;
        self.state = None;
        self.context = None;
    }

    fn transcribe_samples(
        &mut self,
        samples: Vec<f32>,
        language: Option<&str>,
    ) -> Result<Transcript> {
        let forced_language = language
            .map(str::to_owned)
            .or_else(|| self.params.language.clone());
        let params = self.params.clone();

        let state = self.state.as_mut().ok_or_else(|| {
            Error::Recognition("model not loaded; call load_model() first".to_string())
        })?;

        let mut full_params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: 3,
            patience: -1.0,
        });
        full_params.set_language(forced_language.as_deref());
        full_params.set_print_special(false);
        full_params.set_print_progress(false);
        full_params.set_print_realtime(false);
        full_params.set_print_timestamps(false);
        full_params.set_suppress_blank(params.suppress_blank);
        full_params.set_suppress_non_speech_tokens(params.suppress_non_speech_tokens);
        full_params.set_no_speech_thold(params.no_speech_thold);

        state
            .full(full_params, &samples)
            .map_err(|err| Error::Recognition(format!("inference failed: {}", err)))?;

        let num_segments = state
            .full_n_segments()
            .map_err(|err| Error::Recognition(format!("failed to read segments: {}", err)))?;

        let mut segments = Vec::new();
        let mut full_text = String::new();
        for i in 0..num_segments {
            let text = state
                .full_get_segment_text(i)
                .map_err(|err| Error::Recognition(format!("failed to read segment: {}", err)))?;
            // Whisper reports centiseconds.
            let start = state
                .full_get_segment_t0(i)
                .map_err(|err| Error::Recognition(format!("failed to read segment: {}", err)))?
                as f64
                / 100.0;
            let end = state
                .full_get_segment_t1(i)
                .map_err(|err| Error::Recognition(format!("failed to read segment: {}", err)))?
                as f64
                / 100.0;

            full_text.push_str(&text);
            segments.push(Segment { start, end, text });
        }

        let detected = match forced_language {
            Some(code) => code,
            None => state
                .full_lang_id()
                .ok()
                .and_then(whisper_rs::get_lang_str)
                .unwrap_or(UNKNOWN_LANGUAGE)
                .to_string(),
        };
        log::info!(
            "recognized {} segments, language {}",
            segments.len(),
            detected
        );

        Ok(Transcript {
            segments,
            text: full_text.trim().to_string(),
            language: detected,
        })
    }
}

impl Default for WhisperRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn recognize(&mut self, media_path: &Path, language: Option<&str>) -> Result<Transcript> {
        let samples = read_wav_samples(media_path)?;
        log::info!(
            "transcribing {} ({} samples)",
            media_path.display(),
            samples.len()
        );
        self.transcribe_samples(samples, language)
    }
}
