//! Text report formatting for analysis results

use crate::models::{AnalysisResult, TransparencyInfo};

/// Format a result as a human-readable report block.
///
/// `label` heads the block; the CLI passes the input path.
pub fn format_report_text(label: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(label);
    out.push('\n');

    if result.dominant_colors.is_empty() {
        out.push_str("  no dominant colors (no samples passed the alpha filter)\n");
    } else {
        out.push_str("  dominant colors:\n");
        for entry in &result.dominant_colors {
            out.push_str(&format!(
                "    {}  {:>5.1}%  {}  saturation {:.3}\n",
                entry.color,
                entry.area * 100.0,
                if entry.is_dark { "dark " } else { "light" },
                entry.saturation
            ));
        }
    }

    if let Some(avg) = &result.average_color {
        out.push_str(&format!(
            "  average: {}  {}  saturation {:.3}\n",
            avg.color,
            if avg.is_dark { "dark" } else { "light" },
            avg.saturation
        ));
    }

    out.push_str(&format!(
        "  transparent: {}\n",
        if result.is_transparent { "yes" } else { "no" }
    ));
    if result.is_transparent {
        let sides = transparent_sides(&result.transparency_info);
        if !sides.is_empty() {
            out.push_str(&format!("    sides: {}\n", sides.join(", ")));
        }
    }
    out
}

fn transparent_sides(info: &TransparencyInfo) -> Vec<&'static str> {
    let flags = [
        (info.top, "top"),
        (info.bottom, "bottom"),
        (info.left, "left"),
        (info.right, "right"),
        (info.top_left, "top-left"),
        (info.top_right, "top-right"),
        (info.bottom_left, "bottom-left"),
        (info.bottom_right, "bottom-right"),
    ];
    flags.iter().filter(|(set, _)| *set).map(|(_, name)| *name).collect()
}
