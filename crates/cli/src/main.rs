use std::path::PathBuf;
use std::process;

use clap::Parser;

use speechmeter_core::analysis::domain::speech_metrics::SpeechMetrics;
use speechmeter_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use speechmeter_core::pipeline::analyze_speech_use_case::AnalyzeSpeechUseCase;
use speechmeter_core::recognition::domain::speech_recognizer::ModelSize;
use speechmeter_core::recognition::domain::transcript_renderer;
use speechmeter_core::recognition::infrastructure::whisper_recognizer::WhisperRecognizer;
use speechmeter_core::shared::model_resolver;

/// Speech timing analysis for audio files.
#[derive(Parser)]
#[command(name = "speechmeter")]
struct Cli {
    /// Input audio file (e.g. wav, mp3).
    input: PathBuf,

    /// Whisper model size: tiny, base, small, medium, large.
    #[arg(long, default_value = "base")]
    model_size: String,

    /// Minimum silence gap in seconds counted as a pause.
    #[arg(long, default_value = "0.2")]
    pause_threshold: f64,

    /// Render the transcription without timestamps.
    #[arg(long)]
    plain: bool,

    /// Suppress the transcription section.
    #[arg(long)]
    no_transcript: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let model_size = parse_model_size(&cli.model_size);
    let recognizer = build_recognizer(model_size)?;

    let use_case = AnalyzeSpeechUseCase::new(Box::new(FfmpegAudioReader), Box::new(recognizer))
        .with_pause_threshold(cli.pause_threshold);

    println!("Analyzing: {}", cli.input.display());
    let metrics = use_case.run(&cli.input)?;

    print_metrics(&metrics);

    if !cli.no_transcript && !metrics.segments.is_empty() {
        println!("\nSpeech Transcription:");
        if cli.plain {
            println!("{}", transcript_renderer::plain_text(&metrics.segments));
        } else {
            println!(
                "{}",
                transcript_renderer::timestamped_text(&metrics.segments)
            );
        }
    }

    Ok(())
}

fn print_metrics(metrics: &SpeechMetrics) {
    println!("\nSpeech Metrics:");
    println!("speech_rate_wps: {}", metrics.speech_rate_wps);
    println!("avg_phrase_length: {}", metrics.avg_phrase_length);
    println!("avg_pause_duration: {}", metrics.avg_pause_duration);
    println!("pause_count: {}", metrics.pause_count);
    println!("speech_onset_latency: {}", metrics.speech_onset_latency);
    println!("total_duration: {}", metrics.total_duration);
}

fn build_recognizer(
    model_size: ModelSize,
) -> Result<WhisperRecognizer, Box<dyn std::error::Error>> {
    log::info!("Resolving model: {}", model_size.file_name());
    let model_path = model_resolver::resolve(
        model_size.file_name(),
        &model_size.download_url(),
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    WhisperRecognizer::new(&model_path)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    let valid_sizes = ["tiny", "base", "small", "medium", "large"];
    if !valid_sizes.contains(&cli.model_size.as_str()) {
        return Err(format!(
            "Model size must be one of: tiny, base, small, medium, large, got '{}'",
            cli.model_size
        )
        .into());
    }
    if !cli.pause_threshold.is_finite() || cli.pause_threshold < 0.0 {
        return Err(format!(
            "Pause threshold must be a non-negative number of seconds, got {}",
            cli.pause_threshold
        )
        .into());
    }
    Ok(())
}

fn parse_model_size(size: &str) -> ModelSize {
    match size {
        "tiny" => ModelSize::Tiny,
        "small" => ModelSize::Small,
        "medium" => ModelSize::Medium,
        "large" => ModelSize::Large,
        _ => ModelSize::Base,
    }
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech recognition model... {pct}%");
    } else {
        eprint!("\rDownloading speech recognition model... {downloaded} bytes");
    }
}
