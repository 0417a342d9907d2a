//! Shared sampling pass feeding the palette builder and average estimator
//!
//! One strided walk over the buffer accumulates quantized color buckets in
//! first-seen order alongside raw channel sums. Both downstream consumers
//! read from the same qualifying sample set.

use std::collections::HashMap;

/// Every Nth pixel (RGBA quadruplet) is sampled.
pub const SAMPLE_STRIDE: usize = 20;

/// Samples with alpha below this are rejected; anti-aliased edge pixels
/// would otherwise skew the palette.
pub const ALPHA_CUTOFF: u8 = 250;

/// Channels round to the nearest multiple of this step before bucketing.
pub const QUANT_STEP: u32 = 5;

/// A quantized color with its running sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBucket {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub count: usize,
}

/// Accumulated output of one sampling pass.
#[derive(Debug, Default)]
pub struct SamplePass {
    /// Quantized buckets in first-seen order.
    pub buckets: Vec<ColorBucket>,
    /// Raw (unquantized) channel sums over qualifying samples.
    pub sum_r: u64,
    pub sum_g: u64,
    pub sum_b: u64,
    /// Number of samples that passed the alpha filter.
    pub sampled: usize,
}

/// Round a channel to the nearest multiple of [`QUANT_STEP`], capped at 255.
pub fn quantize(channel: u8) -> u8 {
    let stepped = (u32::from(channel) + QUANT_STEP / 2) / QUANT_STEP * QUANT_STEP;
    stepped.min(255) as u8
}

/// Walk the buffer at [`SAMPLE_STRIDE`], keeping near-opaque samples.
pub fn run(buffer: &[u8]) -> SamplePass {
    let mut pass = SamplePass::default();
    let mut index: HashMap<(u8, u8, u8), usize> = HashMap::new();

    let pixels = buffer.len() / 4;
    let mut p = 0;
    while p < pixels {
        let i = p * 4;
        let (r, g, b, a) = (buffer[i], buffer[i + 1], buffer[i + 2], buffer[i + 3]);
        if a >= ALPHA_CUTOFF {
            pass.sampled += 1;
            pass.sum_r += u64::from(r);
            pass.sum_g += u64::from(g);
            pass.sum_b += u64::from(b);

            let key = (quantize(r), quantize(g), quantize(b));
            match index.get(&key) {
                Some(&slot) => pass.buckets[slot].count += 1,
                None => {
                    index.insert(key, pass.buckets.len());
                    pass.buckets.push(ColorBucket { r: key.0, g: key.1, b: key.2, count: 1 });
                }
            }
        }
        p += SAMPLE_STRIDE;
    }
    pass
}
