//! Cadence command-line front end.
//!
//! Plays the caller role of the engine contract: read a WAV file, decode it
//! in memory, run the pause analysis, and emit the result object as JSON on
//! stdout (or into `--output`). All file I/O lives here — the engine only
//! ever sees an owned sample buffer.

use std::path::PathBuf;

use cadence_core::{decode_wav, AnalyzerConfig, PauseAnalyzer};
use tracing::info;

#[derive(Debug)]
struct Args {
    input: PathBuf,
    frame_ms: u32,
    threshold_scale: f32,
    output: Option<PathBuf>,
    pretty: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut input: Option<PathBuf> = None;
    let mut frame_ms: u32 = 30;
    let mut threshold_scale: f32 = 0.6;
    let mut output: Option<PathBuf> = None;
    let mut pretty = false;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--frame-ms" => {
                let Some(v) = it.next() else {
                    return Err("missing value for --frame-ms".into());
                };
                frame_ms = v
                    .parse::<u32>()
                    .map_err(|_| "invalid value for --frame-ms".to_string())?;
            }
            "--threshold-scale" => {
                let Some(v) = it.next() else {
                    return Err("missing value for --threshold-scale".into());
                };
                threshold_scale = v
                    .parse::<f32>()
                    .map_err(|_| "invalid value for --threshold-scale".to_string())?;
            }
            "--output" => {
                let Some(v) = it.next() else {
                    return Err("missing value for --output".into());
                };
                output = Some(PathBuf::from(v));
            }
            "--pretty" => {
                pretty = true;
            }
            "--help" | "-h" => {
                println!(
                    "Usage: cadence <file.wav> [--frame-ms <n>] [--threshold-scale <x>] \\
  [--output <file.json>] [--pretty]"
                );
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown argument: {other}"));
            }
            other => {
                if input.is_some() {
                    return Err(format!("unexpected extra argument: {other}"));
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let Some(input) = input else {
        return Err("missing input file (see --help)".into());
    };
    Ok(Args {
        input,
        frame_ms,
        threshold_scale,
        output,
        pretty,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence=info".parse().unwrap()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("cadence: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = parse_args().map_err(|e| anyhow::anyhow!(e))?;

    let bytes = std::fs::read(&args.input)?;
    let clip = decode_wav(&bytes)?;
    info!(
        file = %args.input.display(),
        samples = clip.samples.len(),
        sample_rate = clip.sample_rate,
        "decoded input"
    );

    let analyzer = PauseAnalyzer::new(AnalyzerConfig {
        frame_ms: args.frame_ms,
        threshold_scale: args.threshold_scale,
        ..AnalyzerConfig::default()
    })?;
    let result = analyzer.analyze(&clip)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match args.output {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&out, &json)?;
            info!(output = %out.display(), "wrote analysis result");
        }
        None => println!("{json}"),
    }

    Ok(())
}
