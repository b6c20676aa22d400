use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use polyraster::{render_file, RenderConfig};
use polyraster_engine::logging::{init_logging, LoggingConfig};
use polyraster_engine::output::OutputFormat;
use polyraster_engine::paint::Rgb;

/// Render an EA979V3 drawing script to a PPM or PNG image
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Script to render
    input: PathBuf,

    /// Image file to write
    output: PathBuf,

    /// Initial background color (RRGGBB)
    #[arg(long, default_value = "ffffff")]
    background: Rgb,

    /// Initial drawing color (RRGGBB)
    #[arg(long, default_value = "000000")]
    color: Rgb,

    /// Output encoding; defaults to png for `.png` outputs, ppm otherwise
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<()> {
    let config = RenderConfig {
        background: args.background,
        color: args.color,
        format: args.format,
    };
    log::debug!("{config:?}");

    render_file(&args.input, &args.output, &config)
        .with_context(|| format!("failed to render '{}'", args.input.display()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(LoggingConfig::default().with_verbosity(args.verbose));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
