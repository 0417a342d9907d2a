//! Persistent analysis result cache
//!
//! Results are keyed by a hash of the image source identity and never
//! change once written, so the store is a plain key-value map with
//! last-writer-wins overwrites. `FileCache` persists as a JSON file across
//! runs; `MemoryCache` backs tests and embedding without touching disk.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::analyze;
use crate::hash;
use crate::models::{AnalysisConfig, AnalysisResult};

/// Error while persisting cache entries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CacheError {
    /// Cache file could not be written
    #[error("failed to write cache: {0}")]
    Io(#[from] io::Error),
    /// Cache contents could not be serialized
    #[error("failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value store for analysis results.
///
/// Misses are cheap and expected. Writes are last-writer-wins; concurrent
/// writers for the same key store identical content.
pub trait ResultCache {
    fn get(&self, key: &str) -> Option<AnalysisResult>;
    fn set(&self, key: &str, value: &AnalysisResult) -> Result<(), CacheError>;
}

/// In-memory cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, AnalysisResult>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultCache for MemoryCache {
    fn get(&self, key: &str) -> Option<AnalysisResult> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &AnalysisResult) -> Result<(), CacheError> {
        lock(&self.entries).insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// JSON-file-backed cache.
///
/// The whole map is loaded on open and rewritten on every `set`. A missing
/// or unreadable file opens as an empty cache; entries are only ever
/// recomputable values.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, AnalysisResult>>,
}

impl FileCache {
    /// Open a cache file, loading any existing entries.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, entries: Mutex::new(entries) }
    }

    /// Default cache location under the user cache directory.
    pub fn default_path() -> PathBuf {
        cache_dir().join("tintscan").join("results.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries and delete the backing file.
    pub fn clear(&self) -> Result<(), CacheError> {
        lock(&self.entries).clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, entries: &HashMap<String, AnalysisResult>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ResultCache for FileCache {
    fn get(&self, key: &str) -> Option<AnalysisResult> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &AnalysisResult) -> Result<(), CacheError> {
        let mut entries = lock(&self.entries);
        entries.insert(key.to_string(), value.clone());
        self.persist(&entries)
    }
}

/// Memoizing wrapper around [`analyze::analyze_pixels`].
///
/// The key hashes `source_id` (a path or URL), tying the entry's lifetime
/// to the image source rather than its bytes. Concurrent callers may
/// compute the same result twice; both writes store identical content.
pub fn analyze_cached(
    cache: &dyn ResultCache,
    source_id: &str,
    buffer: &[u8],
    width: u32,
    height: u32,
    config: &AnalysisConfig,
) -> Option<AnalysisResult> {
    let key = hash::cache_key(source_id);
    if let Some(hit) = cache.get(&key) {
        return Some(hit);
    }
    let result = analyze::analyze_pixels(buffer, width, height, config)?;
    // A failed write only costs a recompute on the next run
    let _ = cache.set(&key, &result);
    Some(result)
}

fn lock<'a>(
    entries: &'a Mutex<HashMap<String, AnalysisResult>>,
) -> MutexGuard<'a, HashMap<String, AnalysisResult>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

fn cache_dir() -> PathBuf {
    if let Ok(dir) = env::var("XDG_CACHE_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".cache");
        }
    }
    env::temp_dir()
}
