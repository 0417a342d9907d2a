//! Dominant palette construction from sampled color buckets

use super::sampling::{ColorBucket, SamplePass};
use crate::color;
use crate::models::DominantColorEntry;

/// Euclidean distance between two colors in RGB space.
fn distance(a: &ColorBucket, b: &ColorBucket) -> f32 {
    let dr = f32::from(a.r) - f32::from(b.r);
    let dg = f32::from(a.g) - f32::from(b.g);
    let db = f32::from(a.b) - f32::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Build the ranked dominant palette.
///
/// Buckets are ranked by count descending (stable sort, so ties keep
/// first-seen order) and merged greedily: a candidate within
/// `similarity_threshold` of an accepted entry folds its count into the
/// first such entry; otherwise it claims a new slot while capacity remains.
/// Once the palette is full, dissimilar candidates are dropped, which is
/// why areas can sum to less than one.
pub fn build(
    pass: &SamplePass,
    max_colors: usize,
    similarity_threshold: f32,
) -> Vec<DominantColorEntry> {
    if pass.sampled == 0 || max_colors == 0 {
        return Vec::new();
    }

    let mut ranked = pass.buckets.clone();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let mut accepted: Vec<ColorBucket> = Vec::with_capacity(max_colors);
    for bucket in ranked {
        let merge_target =
            accepted.iter().position(|entry| distance(entry, &bucket) < similarity_threshold);
        match merge_target {
            Some(slot) => accepted[slot].count += bucket.count,
            None if accepted.len() < max_colors => accepted.push(bucket),
            None => {}
        }
    }

    // Merging can reorder coverage; re-rank by merged count
    accepted.sort_by(|a, b| b.count.cmp(&a.count));

    let total = pass.sampled as f32;
    accepted
        .iter()
        .map(|entry| DominantColorEntry {
            color: color::hex(entry.r, entry.g, entry.b),
            area: color::round3(entry.count as f32 / total),
            is_dark: color::is_dark(entry.r, entry.g, entry.b),
            saturation: color::saturation(entry.r, entry.g, entry.b),
        })
        .collect()
}
