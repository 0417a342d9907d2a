//! Cache command implementation

use std::process::ExitCode;

use crate::cache::FileCache;
use crate::config;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the cache command.
pub fn run(clear: bool) -> ExitCode {
    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let path = config.cache.path.unwrap_or_else(FileCache::default_path);
    let cache = FileCache::open(&path);

    if clear {
        match cache.clear() {
            Ok(()) => {
                println!("Cleared cache at {}", path.display());
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        }
    } else {
        println!("Cache: {}", path.display());
        println!("Entries: {}", cache.len());
        ExitCode::from(EXIT_SUCCESS)
    }
}
