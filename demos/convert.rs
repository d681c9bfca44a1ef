use std::path::PathBuf;
use std::time::Instant;

use transcriptify::pipeline::{JobRequest, Pipeline};
use transcriptify::Provenance;

const SAMPLE_TEXT: &str = "Welcome to the demo. This paragraph exists to show \
sentence grouping. Every fourth sentence starts a new paragraph. Here is the \
fourth one.\n\nThis second paragraph becomes its own segment. The placeholder \
time axis spaces segments ten seconds apart.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = PathBuf::from("output");
    let mut pipeline = Pipeline::new(&output_dir);

    let started = Instant::now();
    let outcome = pipeline.run(JobRequest::EditedText {
        text: SAMPLE_TEXT.to_string(),
        title: "Transcriptify Demo".to_string(),
        provenance: Some(Provenance {
            url: Some("https://youtu.be/demo".to_string()),
            author: Some("The Demo Channel".to_string()),
            title: None,
        }),
    })?;
    println!("Converted in {:.2?}", started.elapsed());

    println!("Title: {}", outcome.title);
    println!("Artifacts:");
    for (format, path) in outcome.files.iter() {
        println!("  {:5} {}", format, path.display());
    }

    println!("\nPreview:");
    println!("{}", outcome.preview);

    Ok(())
}
