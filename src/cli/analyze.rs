//! Analyze command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rayon::prelude::*;

use crate::analyze::{analyze_pixels, format_report_text};
use crate::cache::{analyze_cached, FileCache};
use crate::config::{self, CliOverrides};
use crate::decode;
use crate::models::{AnalysisConfig, AnalysisResult};

use super::{expand_inputs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Arguments to the analyze command.
pub struct AnalyzeArgs {
    pub inputs: Vec<String>,
    pub max_colors: Option<usize>,
    pub similarity: Option<f32>,
    pub alpha_threshold: Option<u8>,
    pub json: bool,
    pub no_cache: bool,
    pub jobs: Option<usize>,
}

/// Execute the analyze command.
pub fn run(args: AnalyzeArgs) -> ExitCode {
    let files = expand_inputs(&args.inputs);
    if files.is_empty() {
        eprintln!("Error: no input files matched");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let overrides = CliOverrides {
        max_colors: args.max_colors,
        similarity_threshold: args.similarity,
        transparency_threshold: args.alpha_threshold,
    };
    let analysis = config::resolve_analysis(&config, &overrides);

    let cache = if config.cache.enabled && !args.no_cache {
        let path = config.cache.path.clone().unwrap_or_else(FileCache::default_path);
        Some(FileCache::open(path))
    } else {
        None
    };

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.unwrap_or(0))
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error: failed to start worker pool: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // collect() on an indexed parallel iterator preserves input order
    let outcomes: Vec<(PathBuf, Result<AnalysisResult, String>)> = pool.install(|| {
        files
            .par_iter()
            .map(|path| (path.clone(), analyze_file(path, &analysis, cache.as_ref())))
            .collect()
    });

    let mut failures = 0;
    for (path, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                if args.json {
                    match serde_json::to_string(&result) {
                        Ok(line) => println!("{}", line),
                        Err(e) => {
                            eprintln!("Error: {}: {}", path.display(), e);
                            failures += 1;
                        }
                    }
                } else {
                    print!("{}", format_report_text(&path.display().to_string(), &result));
                }
            }
            Err(message) => {
                eprintln!("Error: {}", message);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

fn analyze_file(
    path: &Path,
    analysis: &AnalysisConfig,
    cache: Option<&FileCache>,
) -> Result<AnalysisResult, String> {
    let decoded = decode::load_rgba(path).map_err(|e| e.to_string())?;

    let result = match cache {
        Some(cache) => analyze_cached(
            cache,
            &path.display().to_string(),
            &decoded.buffer,
            decoded.width,
            decoded.height,
            analysis,
        ),
        None => analyze_pixels(&decoded.buffer, decoded.width, decoded.height, analysis),
    };
    result.ok_or_else(|| format!("{}: image has no pixels", path.display()))
}
