use std::path::PathBuf;

use clap::{Parser, Subcommand};

use transcriptify::parsers::TranscriptFormat;
use transcriptify::pipeline::{JobOutcome, JobRequest, Pipeline};
use transcriptify::Provenance;

#[cfg(feature = "whisper")]
use transcriptify::engines::whisper::WhisperRecognizer;
#[cfg(feature = "whisper")]
use transcriptify::fetch::{is_youtube_url, YtDlpProvider};

#[derive(Parser, Debug)]
#[command(
    about = "Convert spoken media and caption files into transcript artifacts",
    version
)]
struct Args {
    /// Directory receiving the rendered artifacts
    #[arg(long, default_value = "transcripts")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an existing transcript file (SRT, VTT, or plain text)
    Convert {
        /// Transcript file to convert
        input: PathBuf,

        /// Source format; defaults to the file extension
        #[arg(long)]
        format: Option<String>,

        /// Title used for the artifact names; defaults to the file stem
        #[arg(long)]
        title: Option<String>,

        /// Original video URL shown in the HTML metadata block
        #[arg(long)]
        video_url: Option<String>,

        /// Video author shown in the HTML metadata block
        #[arg(long)]
        video_author: Option<String>,
    },
    /// Transcribe a WAV media file with a local Whisper model
    #[cfg(feature = "whisper")]
    Transcribe {
        /// 16 kHz mono 16-bit PCM WAV file
        input: PathBuf,

        /// Path to the GGML Whisper model file
        #[arg(long)]
        model_path: PathBuf,

        /// Forced language code (e.g. "en"); auto-detected when omitted
        #[arg(long)]
        language: Option<String>,

        /// Title used for the artifact names; defaults to the file stem
        #[arg(long)]
        title: Option<String>,
    },
    /// Fetch a video URL and transcribe it (captions first, Whisper fallback)
    #[cfg(feature = "whisper")]
    Url {
        /// Video page URL
        url: String,

        /// Path to the GGML Whisper model file
        #[arg(long)]
        model_path: PathBuf,

        /// Forced language code (e.g. "en"); auto-detected when omitted
        #[arg(long)]
        language: Option<String>,

        /// Directory for downloaded media and caption files
        #[arg(long, default_value = "uploads")]
        download_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let outcome = match args.command {
        Command::Convert {
            input,
            format,
            title,
            video_url,
            video_author,
        } => {
            let format: TranscriptFormat = match format {
                Some(tag) => tag.parse()?,
                None => input
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default()
                    .parse()?,
            };
            let title = title.unwrap_or_else(|| file_stem(&input));
            let provenance = if video_url.is_some() || video_author.is_some() {
                Some(Provenance {
                    url: video_url,
                    author: video_author,
                    title: None,
                })
            } else {
                None
            };

            let mut pipeline = Pipeline::new(&args.output_dir);
            pipeline.run(JobRequest::TranscriptFile {
                path: input,
                format,
                title,
                provenance,
            })?
        }
        #[cfg(feature = "whisper")]
        Command::Transcribe {
            input,
            model_path,
            language,
            title,
        } => {
            let mut recognizer = WhisperRecognizer::new();
            recognizer.load_model(&model_path)?;

            let title = title.unwrap_or_else(|| file_stem(&input));
            let mut pipeline = Pipeline::new(&args.output_dir).with_recognizer(recognizer);
            pipeline.run(JobRequest::MediaFile {
                path: input,
                title,
                language,
            })?
        }
        #[cfg(feature = "whisper")]
        Command::Url {
            url,
            model_path,
            language,
            download_dir,
        } => {
            if !is_youtube_url(&url) {
                return Err(format!("not a recognized video URL: {}", url).into());
            }

            let mut recognizer = WhisperRecognizer::new();
            recognizer.load_model(&model_path)?;

            let mut pipeline = Pipeline::new(&args.output_dir)
                .with_recognizer(recognizer)
                .with_provider(YtDlpProvider::new(download_dir));
            pipeline.run(JobRequest::VideoUrl { url, language })?
        }
    };

    print_outcome(&outcome);
    Ok(())
}

fn file_stem(path: &PathBuf) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn print_outcome(outcome: &JobOutcome) {
    println!("Title: {}", outcome.title);
    println!("Artifacts:");
    for (format, path) in outcome.files.iter() {
        println!("  {:5} {}", format, path.display());
    }
    println!();
    println!("{}", outcome.preview);
}
