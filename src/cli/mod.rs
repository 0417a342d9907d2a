//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod analyze;
mod cache;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Expand input arguments into concrete files.
///
/// Literal paths pass through untouched; anything else is treated as a
/// glob pattern.
pub fn expand_inputs(inputs: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.exists() {
            files.push(path.to_path_buf());
            continue;
        }
        if let Ok(paths) = glob(input) {
            files.extend(paths.filter_map(Result::ok));
        }
    }
    files
}

/// Tintscan - analyze images for dominant colors, average color and transparency
#[derive(Parser)]
#[command(name = "tint")]
#[command(about = "Tintscan - dominant color, average color and transparency analysis")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze image files and print palette, average color and transparency
    Analyze {
        /// Input image files or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Maximum number of dominant colors
        #[arg(long)]
        max_colors: Option<usize>,

        /// RGB distance below which palette colors merge
        #[arg(long)]
        similarity: Option<f32>,

        /// Alpha values below this count as transparent (0-255)
        #[arg(long)]
        alpha_threshold: Option<u8>,

        /// Print one JSON object per input (in input order) instead of a
        /// text report
        #[arg(long)]
        json: bool,

        /// Skip the result cache entirely
        #[arg(long)]
        no_cache: bool,

        /// Number of parallel analysis jobs (default: all cores)
        #[arg(long)]
        jobs: Option<usize>,
    },
    /// Show or clear the result cache
    Cache {
        /// Delete all cached results
        #[arg(long)]
        clear: bool,
    },
}

/// Run the CLI and return the process exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { inputs, max_colors, similarity, alpha_threshold, json, no_cache, jobs } => {
            analyze::run(analyze::AnalyzeArgs {
                inputs,
                max_colors,
                similarity,
                alpha_threshold,
                json,
                no_cache,
                jobs,
            })
        }
        Commands::Cache { clear } => cache::run(clear),
    }
}
