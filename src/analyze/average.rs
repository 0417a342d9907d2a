//! Average color estimation over the sampled region

use super::sampling::SamplePass;
use crate::color;
use crate::models::AverageColorEntry;

/// Mean color of the qualifying samples, or `None` when there were none.
///
/// Callers must treat `None` distinctly from a valid black or white result;
/// it means the alpha filter excluded every sample.
pub fn build(pass: &SamplePass) -> Option<AverageColorEntry> {
    if pass.sampled == 0 {
        return None;
    }
    let n = pass.sampled as u64;
    let r = mean_channel(pass.sum_r, n);
    let g = mean_channel(pass.sum_g, n);
    let b = mean_channel(pass.sum_b, n);

    Some(AverageColorEntry {
        color: color::hex(r, g, b),
        is_dark: color::is_dark(r, g, b),
        saturation: color::saturation(r, g, b),
    })
}

/// Round-to-nearest integer mean of one channel sum.
fn mean_channel(sum: u64, n: u64) -> u8 {
    ((sum + n / 2) / n) as u8
}
