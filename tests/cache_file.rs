//! FileCache persistence and memoization behavior

use tintscan::cache::{analyze_cached, FileCache, ResultCache};
use tintscan::hash;
use tintscan::models::AnalysisConfig;

fn opaque_buffer(rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat(16)
}

#[test]
fn entries_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let buffer = opaque_buffer([40, 80, 120, 255]);
    let result = {
        let cache = FileCache::open(&path);
        analyze_cached(&cache, "photo.png", &buffer, 4, 4, &AnalysisConfig::default()).unwrap()
    };

    let reopened = FileCache::open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get(&hash::cache_key("photo.png")), Some(result));
}

#[test]
fn memoization_is_keyed_by_source_identity() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::open(dir.path().join("results.json"));

    let red = opaque_buffer([255, 0, 0, 255]);
    let first =
        analyze_cached(&cache, "img.png", &red, 4, 4, &AnalysisConfig::default()).unwrap();

    // Same source identity with different bytes returns the cached result;
    // the key hashes the address, not the content
    let blue = opaque_buffer([0, 0, 255, 255]);
    let second =
        analyze_cached(&cache, "img.png", &blue, 4, 4, &AnalysisConfig::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.dominant_colors[0].color, "#ff0000");
}

#[test]
fn corrupt_cache_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    std::fs::write(&path, "not json at all {{{").unwrap();

    let cache = FileCache::open(&path);
    assert!(cache.is_empty());

    // And stays usable
    let buffer = opaque_buffer([10, 10, 10, 255]);
    analyze_cached(&cache, "a.png", &buffer, 4, 4, &AnalysisConfig::default()).unwrap();
    assert_eq!(cache.len(), 1);
}

#[test]
fn clear_removes_the_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let cache = FileCache::open(&path);
    let buffer = opaque_buffer([10, 10, 10, 255]);
    analyze_cached(&cache, "a.png", &buffer, 4, 4, &AnalysisConfig::default()).unwrap();
    assert!(path.exists());

    cache.clear().unwrap();
    assert!(cache.is_empty());
    assert!(!path.exists());

    // Clearing an already-missing file is fine
    cache.clear().unwrap();
}

#[test]
fn cache_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("results.json");

    let cache = FileCache::open(&path);
    let buffer = opaque_buffer([10, 10, 10, 255]);
    analyze_cached(&cache, "a.png", &buffer, 4, 4, &AnalysisConfig::default()).unwrap();
    assert!(path.exists());
}
