//! Image color and transparency analysis
//!
//! Analyzes a decoded RGBA buffer to produce:
//! - Transparency flags for edges, corners and interior
//! - A quantized dominant color palette ranked by coverage area
//! - An average color with darkness and saturation classification

mod average;
mod palette;
mod report;
mod sampling;
mod transparency;

// Re-export public API
pub use report::format_report_text;
pub use sampling::{ColorBucket, SamplePass, ALPHA_CUTOFF, QUANT_STEP, SAMPLE_STRIDE};

use crate::models::{AnalysisConfig, AnalysisResult};

/// Analyze a decoded RGBA buffer.
///
/// Runs the transparency scan, then a single sampling pass feeding both the
/// palette builder and the average color estimator, and assembles the
/// result. The top-level `is_dark` mirrors the highest-area palette entry
/// (false when the palette is empty) and `is_transparent` mirrors
/// `transparency_info.any`.
///
/// Returns `None` when a dimension is zero or the buffer holds fewer than
/// `width * height` RGBA quadruplets. Decode and fetch failures belong to
/// the image-loading collaborator and never reach this function.
///
/// The result is deterministic for a fixed buffer and configuration.
///
/// # Examples
///
/// ```
/// use tintscan::analyze::analyze_pixels;
/// use tintscan::models::AnalysisConfig;
///
/// // A 2x2 fully opaque dark-gray image
/// let buffer = [10u8, 10, 10, 255].repeat(4);
/// let result = analyze_pixels(&buffer, 2, 2, &AnalysisConfig::default()).unwrap();
/// assert!(result.is_dark);
/// assert!(!result.is_transparent);
/// assert_eq!(result.dominant_colors[0].color, "#0a0a0a");
/// ```
pub fn analyze_pixels(
    buffer: &[u8],
    width: u32,
    height: u32,
    config: &AnalysisConfig,
) -> Option<AnalysisResult> {
    if width == 0 || height == 0 {
        return None;
    }
    let expected = width as usize * height as usize * 4;
    if buffer.len() < expected {
        return None;
    }
    let buffer = &buffer[..expected];

    let transparency_info =
        transparency::detect(buffer, width, height, config.transparency_threshold);
    let pass = sampling::run(buffer);
    let dominant_colors = palette::build(&pass, config.max_colors, config.similarity_threshold);
    let average_color = average::build(&pass);

    let is_dark = dominant_colors.first().map(|entry| entry.is_dark).unwrap_or(false);
    Some(AnalysisResult {
        dominant_colors,
        average_color,
        is_dark,
        is_transparent: transparency_info.any,
        transparency_info,
    })
}
