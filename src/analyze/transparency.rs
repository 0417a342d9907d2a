//! Border and interior transparency detection
//!
//! Corners are checked directly, edges at a stride of five pixels, and the
//! interior only when the whole border turned out opaque.

use crate::models::TransparencyInfo;

/// Pixels between probes when walking an edge.
const EDGE_STRIDE: usize = 5;

/// Approximate number of interior probes across the whole buffer.
const INTERIOR_PROBES: usize = 100;

fn alpha_at(buffer: &[u8], width: u32, x: u32, y: u32) -> u8 {
    buffer[(y as usize * width as usize + x as usize) * 4 + 3]
}

/// Scan a buffer for transparent pixels along its border and interior.
///
/// A pixel is transparent when its alpha is strictly below `threshold`.
/// Edge scans stop at the first transparent hit. The interior is probed at
/// a byte stride of `len / 100` rounded down to a multiple of four so every
/// probe lands on an alpha byte; when the border already has transparency
/// the interior is assumed transparent without scanning.
///
/// The caller guarantees `width` and `height` are non-zero and the buffer
/// holds `width * height` RGBA quadruplets. A 1x1 image degenerates all
/// corners and edges onto the same pixel and still produces valid flags.
pub fn detect(buffer: &[u8], width: u32, height: u32, threshold: u8) -> TransparencyInfo {
    let right = width - 1;
    let bottom = height - 1;

    let mut info = TransparencyInfo {
        top_left: alpha_at(buffer, width, 0, 0) < threshold,
        top_right: alpha_at(buffer, width, right, 0) < threshold,
        bottom_left: alpha_at(buffer, width, 0, bottom) < threshold,
        bottom_right: alpha_at(buffer, width, right, bottom) < threshold,
        ..TransparencyInfo::default()
    };

    info.top = scan_row(buffer, width, 0, threshold);
    info.bottom = scan_row(buffer, width, bottom, threshold);
    info.left = scan_column(buffer, width, height, 0, threshold);
    info.right = scan_column(buffer, width, height, right, threshold);

    let border_solid = !(info.top || info.bottom || info.left || info.right);
    let interior = if border_solid { scan_interior(buffer, threshold) } else { true };

    info.any = interior
        || info.top
        || info.bottom
        || info.left
        || info.right
        || info.top_left
        || info.top_right
        || info.bottom_left
        || info.bottom_right;
    info
}

/// Walk one row at `EDGE_STRIDE`, reporting the first transparent pixel.
fn scan_row(buffer: &[u8], width: u32, y: u32, threshold: u8) -> bool {
    (0..width).step_by(EDGE_STRIDE).any(|x| alpha_at(buffer, width, x, y) < threshold)
}

/// Walk one column at `EDGE_STRIDE`, reporting the first transparent pixel.
fn scan_column(buffer: &[u8], width: u32, height: u32, x: u32, threshold: u8) -> bool {
    (0..height).step_by(EDGE_STRIDE).any(|y| alpha_at(buffer, width, x, y) < threshold)
}

/// Probe roughly `INTERIOR_PROBES` alpha bytes spread over the buffer.
fn scan_interior(buffer: &[u8], threshold: u8) -> bool {
    let stride = ((buffer.len() / INTERIOR_PROBES) & !3).max(4);
    let mut i = 3;
    while i < buffer.len() {
        if buffer[i] < threshold {
            return true;
        }
        i += stride;
    }
    false
}
