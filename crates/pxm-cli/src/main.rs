//! pxm - PPM (P6) processing CLI
//!
//! Loads a binary pixmap, runs the fixed 5x5 Gaussian convolution pass and
//! writes the result back in the same format.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "pxm")]
#[command(author, version, about = "PPM (P6) processing CLI")]
#[command(long_about = "
Reads binary PPM (P6) pixmaps and applies a fixed-kernel Gaussian blur.

Examples:
  pxm info image.ppm                  # Show image info
  pxm blur input.ppm -o output.ppm    # Apply the 5x5 gaussian blur
  pxm -v blur input.ppm -o out.ppm    # ...and report the convolution time
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the fixed 5x5 Gaussian blur
    #[command(visible_alias = "b")]
    Blur(BlurArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Blur(args) => commands::blur::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
