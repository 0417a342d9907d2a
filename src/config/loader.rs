//! Configuration loading and discovery for `tint.toml`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::TintConfig;
use crate::models::AnalysisConfig;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse tint.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override maximum palette size
    pub max_colors: Option<usize>,
    /// Override the palette merge distance
    pub similarity_threshold: Option<f32>,
    /// Override the transparency alpha threshold
    pub transparency_threshold: Option<u8>,
}

/// Find tint.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from the current directory looking for tint.toml
/// 2. Check XDG_CONFIG_HOME/tintscan/tint.toml (or ~/.config/tintscan/tint.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(&cwd) {
            return Some(path);
        }
    }
    find_xdg_config()
}

/// Find tint.toml by walking up from `start`.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join("tint.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}

/// Find tint.toml in the XDG config directory.
fn find_xdg_config() -> Option<PathBuf> {
    let base = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(env::var("HOME").ok()?).join(".config"),
    };
    let candidate = base.join("tintscan").join("tint.toml");
    candidate.is_file().then_some(candidate)
}

/// Load and parse a config file.
///
/// # Errors
///
/// Returns `ConfigError` when the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<TintConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Discover and load the config, defaulting when no file exists.
///
/// # Errors
///
/// Returns `ConfigError` only when a file was found but could not be
/// read or parsed; a missing file is not an error.
pub fn load_or_default() -> Result<TintConfig, ConfigError> {
    match find_config() {
        Some(path) => load_config(&path),
        None => Ok(TintConfig::default()),
    }
}

/// Resolve the effective analysis config from file values and CLI overrides.
pub fn resolve_analysis(config: &TintConfig, overrides: &CliOverrides) -> AnalysisConfig {
    AnalysisConfig {
        max_colors: overrides.max_colors.unwrap_or(config.defaults.max_colors),
        similarity_threshold: overrides
            .similarity_threshold
            .unwrap_or(config.defaults.similarity_threshold),
        transparency_threshold: overrides
            .transparency_threshold
            .unwrap_or(config.defaults.transparency_threshold),
    }
}
