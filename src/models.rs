//! Data models for analysis configuration and results
//!
//! Everything serializes with camelCase field names; this is the shape that
//! crosses the worker boundary and lands in the on-disk cache.

use serde::{Deserialize, Serialize};

/// Tuning knobs for a single analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    /// Maximum number of dominant palette entries.
    pub max_colors: usize,
    /// Euclidean RGB distance below which palette candidates merge.
    #[serde(alias = "threshold")]
    pub similarity_threshold: f32,
    /// Alpha values strictly below this count as transparent.
    pub transparency_threshold: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { max_colors: 5, similarity_threshold: 96.0, transparency_threshold: 255 }
    }
}

/// One entry of the dominant color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantColorEntry {
    /// `#rrggbb` hex string.
    pub color: String,
    /// Fraction of sampled pixels this entry covers, 0..1, 3 decimals.
    pub area: f32,
    pub is_dark: bool,
    /// HSV saturation, 0..1, 3 decimals.
    pub saturation: f32,
}

/// The single color summarizing the whole sampled region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageColorEntry {
    /// `#rrggbb` hex string.
    pub color: String,
    pub is_dark: bool,
    pub saturation: f32,
}

/// Where alpha-transparent pixels were found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransparencyInfo {
    /// True when any edge, corner or interior probe hit a transparent pixel.
    pub any: bool,
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

/// Complete result of analyzing one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Palette ranked by coverage, at most `max_colors` entries.
    pub dominant_colors: Vec<DominantColorEntry>,
    /// Absent when no sample passed the alpha filter.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average_color: Option<AverageColorEntry>,
    /// Darkness of the highest-area palette entry, false when the palette
    /// is empty.
    pub is_dark: bool,
    pub is_transparent: bool,
    pub transparency_info: TransparencyInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_colors, 5);
        assert_eq!(config.similarity_threshold, 96.0);
        assert_eq!(config.transparency_threshold, 255);
    }

    #[test]
    fn test_config_partial_deserialize_fills_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"maxColors": 3}"#).unwrap();
        assert_eq!(config.max_colors, 3);
        assert_eq!(config.similarity_threshold, 96.0);
        assert_eq!(config.transparency_threshold, 255);
    }

    #[test]
    fn test_result_roundtrip() {
        let result = AnalysisResult {
            dominant_colors: vec![DominantColorEntry {
                color: "#aabbcc".to_string(),
                area: 0.75,
                is_dark: false,
                saturation: 0.167,
            }],
            average_color: Some(AverageColorEntry {
                color: "#101010".to_string(),
                is_dark: true,
                saturation: 0.0,
            }),
            is_dark: false,
            is_transparent: true,
            transparency_info: TransparencyInfo { any: true, top: true, ..Default::default() },
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""dominantColors""#));
        assert!(json.contains(r#""isDark""#));
        assert!(json.contains(r#""transparencyInfo""#));
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }

    #[test]
    fn test_absent_average_color_is_omitted() {
        let result = AnalysisResult {
            dominant_colors: vec![],
            average_color: None,
            is_dark: false,
            is_transparent: false,
            transparency_info: TransparencyInfo::default(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("averageColor"));
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.average_color, None);
    }
}
