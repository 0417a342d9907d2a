//! Configuration schema types for `tint.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::AnalysisConfig;

/// Root configuration loaded from `tint.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TintConfig {
    /// Analysis defaults applied when the CLI does not override them
    pub defaults: DefaultsConfig,
    /// Result cache behavior
    pub cache: CacheConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Maximum number of dominant palette entries
    pub max_colors: usize,
    /// Euclidean RGB distance below which palette colors merge
    pub similarity_threshold: f32,
    /// Alpha values strictly below this count as transparent
    pub transparency_threshold: u8,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let analysis = AnalysisConfig::default();
        Self {
            max_colors: analysis.max_colors,
            similarity_threshold: analysis.similarity_threshold,
            transparency_threshold: analysis.transparency_threshold,
        }
    }
}

/// `[cache]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether results are cached at all
    pub enabled: bool,
    /// Override for the cache file location
    pub path: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true, path: None }
    }
}
