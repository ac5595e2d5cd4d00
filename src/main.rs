//! Presto CLI - speed up and archive a recording, then restore it.

use std::path::PathBuf;

use clap::Parser;

use presto::{run_observer, run_worker, PipelineConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "presto", version, about = "Time-compressed lossless audio archival")]
struct Args {
    /// Input WAV file
    input: PathBuf,

    /// Compressed FLAC artifact written by the worker stage
    #[arg(long, default_value = "output_fast.flac")]
    compressed: PathBuf,

    /// Restored WAV written by the observer stage
    #[arg(long, default_value = "restored.wav")]
    restored: PathBuf,

    /// Speed factor (> 1 shortens, < 1 lengthens)
    #[arg(long, default_value_t = 4.0)]
    factor: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let config = PipelineConfig::default();

    let record = run_worker(&args.input, &args.compressed, args.factor, &config)?;
    run_observer(&args.compressed, &args.restored, &record, &config)?;

    Ok(())
}
