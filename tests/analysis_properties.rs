//! Property tests for the analysis pipeline through the public API

use tintscan::analyze::{analyze_pixels, SAMPLE_STRIDE};
use tintscan::models::{AnalysisConfig, AnalysisResult};

/// Deterministic pseudo-random RGBA buffer.
fn noise_buffer(width: u32, height: u32, alpha: u8) -> Vec<u8> {
    let mut state: u32 = 0x9e37_79b9;
    let mut buffer = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        for _ in 0..3 {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            buffer.push((state >> 24) as u8);
        }
        buffer.push(alpha);
    }
    buffer
}

/// One block of `SAMPLE_STRIDE` pixels per color.
fn block_buffer(colors: &[[u8; 4]]) -> (Vec<u8>, u32, u32) {
    let mut buffer = Vec::with_capacity(colors.len() * SAMPLE_STRIDE * 4);
    for color in colors {
        for _ in 0..SAMPLE_STRIDE {
            buffer.extend_from_slice(color);
        }
    }
    (buffer, SAMPLE_STRIDE as u32, colors.len() as u32)
}

#[test]
fn repeated_invocations_are_identical() {
    let buffer = noise_buffer(100, 60, 255);
    let config = AnalysisConfig::default();

    let first = analyze_pixels(&buffer, 100, 60, &config).unwrap();
    let second = analyze_pixels(&buffer, 100, 60, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn palette_respects_max_colors_and_area_bounds() {
    let buffer = noise_buffer(200, 200, 255);
    let config = AnalysisConfig::default();
    let result = analyze_pixels(&buffer, 200, 200, &config).unwrap();

    assert!(result.dominant_colors.len() <= config.max_colors);
    let total: f32 = result.dominant_colors.iter().map(|entry| entry.area).sum();
    // Rounding to 3 decimals can nudge the sum slightly past 1.0
    assert!(total <= 1.005, "areas summed to {}", total);
    for entry in &result.dominant_colors {
        assert!(entry.area > 0.0 && entry.area <= 1.0);
    }
}

#[test]
fn custom_max_colors_caps_the_palette() {
    let (buffer, width, height) = block_buffer(&[
        [255, 0, 0, 255],
        [0, 255, 0, 255],
        [0, 0, 255, 255],
        [255, 255, 255, 255],
    ]);
    let config = AnalysisConfig { max_colors: 2, ..Default::default() };
    let result = analyze_pixels(&buffer, width, height, &config).unwrap();

    assert_eq!(result.dominant_colors.len(), 2);
    assert_eq!(result.dominant_colors[0].color, "#ff0000");
    assert_eq!(result.dominant_colors[1].color, "#00ff00");
}

#[test]
fn similar_colors_merge_into_one_entry() {
    // RGB distance 30, below the default threshold of 96
    let (buffer, width, height) =
        block_buffer(&[[60, 120, 180, 255], [80, 130, 160, 255]]);
    let result = analyze_pixels(&buffer, width, height, &AnalysisConfig::default()).unwrap();

    assert_eq!(result.dominant_colors.len(), 1);
    assert_eq!(result.dominant_colors[0].area, 1.0);
}

#[test]
fn transparency_threshold_is_configurable() {
    let buffer = noise_buffer(32, 32, 200);

    // Default threshold of 255 counts alpha 200 as transparent
    let strict = analyze_pixels(&buffer, 32, 32, &AnalysisConfig::default()).unwrap();
    assert!(strict.is_transparent);

    // A threshold of 150 does not
    let lenient = AnalysisConfig { transparency_threshold: 150, ..Default::default() };
    let relaxed = analyze_pixels(&buffer, 32, 32, &lenient).unwrap();
    assert!(!relaxed.is_transparent);
}

#[test]
fn translucent_image_has_no_palette_or_average() {
    // Alpha 200 is below the near-opaque sampling cutoff of 250
    let buffer = noise_buffer(32, 32, 200);
    let lenient = AnalysisConfig { transparency_threshold: 150, ..Default::default() };
    let result = analyze_pixels(&buffer, 32, 32, &lenient).unwrap();

    assert!(result.dominant_colors.is_empty());
    assert_eq!(result.average_color, None);
    assert!(!result.is_dark);
}

#[test]
fn wire_shape_uses_camel_case_and_round_trips() {
    let (buffer, width, height) = block_buffer(&[[5, 3, 4, 255], [250, 250, 250, 255]]);
    let result = analyze_pixels(&buffer, width, height, &AnalysisConfig::default()).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""dominantColors""#));
    assert!(json.contains(r#""averageColor""#));
    assert!(json.contains(r#""isTransparent""#));
    assert!(json.contains(r#""transparencyInfo""#));

    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, parsed);
}
