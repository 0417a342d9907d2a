//! Color math primitives: hex formatting, luminance and saturation
//!
//! Darkness classification uses ITU-R BT.709 luminance weights. Saturation
//! is HSV saturation with a near-black override: very dark pixels read as
//! colorless to the eye, whatever their channel spread.

/// Luminance at or below this value classifies a color as dark.
pub const DARK_LUMINANCE_MAX: f32 = 128.0;

/// Normalized max-channel value below which saturation is forced to zero.
pub const NEAR_BLACK_MAX: f32 = 0.05;

/// Format an RGB triple as a lowercase `#rrggbb` hex string.
///
/// # Examples
///
/// ```
/// use tintscan::color::hex;
///
/// assert_eq!(hex(255, 0, 0), "#ff0000");
/// assert_eq!(hex(16, 32, 48), "#102030");
/// ```
pub fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Relative luminance of an RGB triple (BT.709 coefficients), on a 0..255 scale.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b)
}

/// Whether a color is dark: luminance at or below 128.
pub fn is_dark(r: u8, g: u8, b: u8) -> bool {
    luminance(r, g, b) <= DARK_LUMINANCE_MAX
}

/// HSV saturation of an RGB triple, 0.0..=1.0, rounded to 3 decimals.
///
/// Channels are normalized to 0..1 before computing `(max - min) / max`.
/// A normalized max channel below [`NEAR_BLACK_MAX`] yields 0 regardless
/// of the channel delta.
pub fn saturation(r: u8, g: u8, b: u8) -> f32 {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf).max(bf);
    if max < NEAR_BLACK_MAX {
        return 0.0;
    }
    let min = rf.min(gf).min(bf);
    round3((max - min) / max)
}

/// Round a value to 3 decimal places.
pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
