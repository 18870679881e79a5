//! Automatic global threshold selection (Otsu's method)
//!
//! Computes a single intensity cut for binarization by maximizing the
//! between-class variance over the 256-bin grayscale histogram.

use cytoseg_core::RasterBuffer;
use log::debug;

/// Downward bias applied to the raw Otsu threshold before it is returned.
///
/// Policy constant, not a tuning accident: microscopy strokes and cell
/// bodies are easier to recover when the cut errs toward marking more
/// pixels as foreground, so the computed threshold is scaled down by 5%.
pub const FOREGROUND_BIAS: f32 = 0.95;

/// Compute the global binarization threshold for a raster.
///
/// Pixels whose grayscale value is strictly greater than the returned
/// threshold are foreground. The raw argmax of
/// `wBg * wFg * (meanBg - meanFg)^2` is scanned from t = 0 upward and
/// replaced only on strictly greater variance, so ties keep the lowest
/// threshold; the result is then scaled by [`FOREGROUND_BIAS`].
///
/// A uniform image has no between-class split and yields 0.
pub fn otsu_threshold(raster: &RasterBuffer) -> u8 {
    let histogram = raster.gray_histogram();

    let total: u64 = histogram.iter().map(|&c| u64::from(c)).sum();
    let weighted_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * f64::from(count))
        .sum();

    let mut weight_bg = 0u64;
    let mut sum_bg = 0.0f64;
    let mut best_variance = 0.0f64;
    let mut best_threshold = 0usize;

    for (threshold, &count) in histogram.iter().enumerate() {
        weight_bg += u64::from(count);
        if weight_bg == 0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0 {
            break;
        }

        sum_bg += threshold as f64 * f64::from(count);
        let mean_bg = sum_bg / weight_bg as f64;
        let mean_fg = (weighted_sum - sum_bg) / weight_fg as f64;
        let diff = mean_bg - mean_fg;
        let variance = weight_bg as f64 * weight_fg as f64 * diff * diff;

        if variance > best_variance {
            best_variance = variance;
            best_threshold = threshold;
        }
    }

    let biased = (best_threshold as f32 * FOREGROUND_BIAS) as u8;
    debug!(
        "otsu: raw threshold {}, biased {}",
        best_threshold, biased
    );
    biased
}

/// Binarize a raster against a fixed threshold.
///
/// Returns a 1-channel buffer with 255 where the grayscale value exceeds
/// `threshold` and 0 elsewhere.
pub fn threshold_to_binary(raster: &RasterBuffer, threshold: u8) -> RasterBuffer {
    let width = raster.width();
    let height = raster.height();
    let mut out = RasterBuffer::new(width, height, 1).expect("input dimensions are valid");

    for y in 0..height {
        for x in 0..width {
            if raster.gray(x, y) > threshold {
                out.set_unchecked(x, y, 0, 255);
            }
        }
    }

    out
}
