use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use voxgen::config::{ConfigSource, DEFAULT_MAX_ATTEMPTS, EnvSource};
use voxgen::core::tts::select_engine;
use voxgen::pipeline::{self, PipelineOptions};
use voxgen::scenes;

/// voxgen - Batch text-to-speech generator for scene-based video narration
#[derive(Parser, Debug)]
#[command(name = "voxgen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TTS provider (minimax, dashscope, edge); picked automatically when omitted
    #[arg(short = 'p', long = "provider", value_name = "NAME")]
    provider: Option<String>,

    /// Maximum generation attempts per scene
    #[arg(short = 'r', long = "retries", value_name = "N", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    retries: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if it exists (must be done before provider selection)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Select the provider before touching the filesystem or the network; an
    // unknown name or incomplete configuration aborts here with a non-zero exit
    let source: Arc<dyn ConfigSource> = Arc::new(EnvSource);
    let engine = select_engine(cli.provider.as_deref(), source)?;
    info!("Using TTS provider: {}", engine.name());

    let scenes = scenes::scenes();
    let options = PipelineOptions {
        max_attempts: cli.retries.max(1),
        ..PipelineOptions::default()
    };

    let report = pipeline::run(engine.as_ref(), &scenes, &options).await?;

    if !report.is_success() {
        error!(
            "{} of {} scene(s) failed to generate",
            report.failed,
            scenes.len()
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
