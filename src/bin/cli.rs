//! CLI application for scoring a recorded landmark set.
//!
//! Usage:
//!   facial-harmony landmarks.json                    # Human-readable output
//!   facial-harmony landmarks.json --format csv       # CSV export
//!   facial-harmony landmarks.json --format json -o report.json

use clap::{Parser, ValueEnum};
use facial_harmony::logging::{init_tracing, LogConfig};
use facial_harmony::{evaluate, CoordinateSpace, EvaluationReport, LandmarkDocument};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "facial-harmony")]
#[command(author, version, about = "Facial harmony scoring from 22 landmarks", long_about = None)]
struct Args {
    /// Landmark document (JSON)
    #[arg(required = true)]
    landmarks: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat landmark coordinates as pixels instead of fractions of the image
    #[arg(long)]
    pixels: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Csv,
    Json,
}

fn main() {
    let args = Args::parse();

    let log_config = LogConfig {
        log_level: args.log_level.clone(),
        ..LogConfig::default()
    }
    .verbose(args.verbose);
    init_tracing(&log_config);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %args.landmarks.display(), "Loading landmarks");
    let mut doc = LandmarkDocument::load(&args.landmarks)?;
    if args.pixels {
        doc.space = CoordinateSpace::Pixel;
    }
    let set = doc.into_set()?;
    info!(
        placed = set.len(),
        width = set.image_size().width,
        height = set.image_size().height,
        "Landmarks loaded"
    );

    let report = evaluate(&set)?;
    let output_str = render(&report, args.format)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        info!(path = %path.display(), "Report written");
    } else {
        print!("{}", output_str);
    }

    Ok(())
}

fn render(report: &EvaluationReport, format: Format) -> facial_harmony::Result<String> {
    Ok(match format {
        Format::Text => format!("{}\n", report.to_text()),
        Format::Csv => report.to_csv(),
        Format::Json => format!("{}\n", report.to_json()?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["facial-harmony", "landmarks.json"]).unwrap();
        assert_eq!(args.landmarks, PathBuf::from("landmarks.json"));
        assert_eq!(args.format, Format::Text);
        assert!(!args.pixels);
        assert!(args.output.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn parses_export_options() {
        let args = Args::try_parse_from([
            "facial-harmony",
            "points.json",
            "--format",
            "csv",
            "-o",
            "out.csv",
            "--pixels",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Csv);
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert!(args.pixels && args.verbose);
    }

    #[test]
    fn landmarks_argument_is_required() {
        assert!(Args::try_parse_from(["facial-harmony"]).is_err());
    }
}
