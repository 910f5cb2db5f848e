//! hsimg - HSDEC image processing CLI
//!
//! Converts each input image to monochrome and saves it to the paired
//! output file, then normalizes the monochrome image in place to report
//! its dynamic range.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hsimg")]
#[command(author, version, about = "HSDEC image processing CLI")]
#[command(long_about = "
Processes HSDEC text-format images in input/output pairs.

For every pair the input is decoded, converted to monochrome (Rec.601
luma), and the monochrome image is written to the output path. The
monochrome image is then normalized in place and its global minimum and
maximum are reported. A failing pair is skipped; the remaining pairs are
still processed.

Examples:
  hsimg photo.hsdec photo_mono.hsdec
  hsimg a.hsdec a_out.hsdec b.hsdec b_out.hsdec
  hsimg -v scan.hsdec scan_mono.hsdec
")]
struct Cli {
    /// Input/output file pairs: INPUT1 OUTPUT1 [INPUT2 OUTPUT2 ...]
    #[arg(required = true, num_args = 2.., value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    commands::process::run(&cli.files)
}
