//! Pixel classification - raster to boolean grid
//!
//! Turns a raw raster (grayscale image or painted RGBA overlay) into a
//! [`BinaryGrid`]: stroke vs. not, foreground vs. background. The
//! classifier has no error conditions; an all-false grid is a valid
//! result the caller detects with [`BinaryGrid::count`].

use crate::otsu::otsu_threshold;
use cytoseg_core::{BinaryGrid, RasterBuffer};
use log::trace;

/// Default alpha cutoff for stroke detection.
///
/// Overlay painting produces anti-aliased edges with very low alpha;
/// anything above this is a deliberate stroke pixel.
pub const DEFAULT_ALPHA_CUTOFF: u8 = 10;

/// How to decide whether a pixel is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyMode {
    /// Stroke detection: set iff the alpha sample exceeds the cutoff.
    /// Buffers without an alpha channel fall back to the grayscale mean
    /// against the same cutoff.
    AlphaCutoff(u8),
    /// Foreground detection: set iff the grayscale mean exceeds the cutoff.
    IntensityCutoff(u8),
    /// Foreground detection with the cutoff chosen by
    /// [`otsu_threshold`](crate::otsu_threshold).
    Auto,
}

impl Default for ClassifyMode {
    fn default() -> Self {
        ClassifyMode::AlphaCutoff(DEFAULT_ALPHA_CUTOFF)
    }
}

/// Classify every pixel of `raster` into a boolean grid.
pub fn classify(raster: &RasterBuffer, mode: ClassifyMode) -> BinaryGrid {
    let width = raster.width();
    let height = raster.height();
    let mut grid = BinaryGrid::new(width, height).expect("raster dimensions are valid");

    match mode {
        ClassifyMode::AlphaCutoff(cutoff) => {
            for y in 0..height {
                for x in 0..width {
                    let value = raster.alpha(x, y).unwrap_or_else(|| raster.gray(x, y));
                    if value > cutoff {
                        grid.set_unchecked(x, y, true);
                    }
                }
            }
        }
        ClassifyMode::IntensityCutoff(cutoff) => {
            fill_by_intensity(raster, &mut grid, cutoff);
        }
        ClassifyMode::Auto => {
            let cutoff = otsu_threshold(raster);
            trace!("classify: auto cutoff {}", cutoff);
            fill_by_intensity(raster, &mut grid, cutoff);
        }
    }

    grid
}

fn fill_by_intensity(raster: &RasterBuffer, grid: &mut BinaryGrid, cutoff: u8) {
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            if raster.gray(x, y) > cutoff {
                grid.set_unchecked(x, y, true);
            }
        }
    }
}
