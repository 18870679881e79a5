//! The two segmentation pipelines
//!
//! - [`segment_from_strokes`]: hand-drawn overlay strokes to a label
//!   image, one label per enclosed cell.
//! - [`watershed_split`]: an already-binary image to a recolored raster
//!   with touching objects separated by one-pixel lines.
//!
//! Both are synchronous, single-threaded passes with no shared state;
//! independent calls parallelize trivially from the outside.

use crate::absorb::absorb_boundaries;
use crate::closure::close_borders;
use crate::config::SegmentationConfig;
use crate::context::SegmentationContext;
use crate::distance::{distance_transform, smooth_distance};
use crate::error::{SegmentError, SegmentResult};
use crate::exterior::fill_exterior;
use crate::labeler::label_regions;
use crate::stats::{RegionStats, region_stats};
use crate::watershed::flood_from_maxima;
use cytoseg_binarize::{ClassifyMode, classify};
use cytoseg_core::{BinaryGrid, CellLabel, LabelGrid, RasterBuffer};
use cytoseg_morph::check_binary;
use log::debug;

/// Result of a stroke segmentation run.
#[derive(Debug)]
pub struct Segmentation {
    /// The finished label image.
    pub labels: LabelGrid,
    /// Number of cells found (the dense label range is 1..=cell_count).
    pub cell_count: u32,
    /// Per-cell measurements, sorted by label.
    pub stats: Vec<RegionStats>,
}

/// Segment a painted stroke overlay into labeled cells.
///
/// Stages: stroke classification, border closure, exterior fill, region
/// labeling with minimum-area filtering, boundary absorption.
///
/// # Errors
///
/// - [`SegmentError::NoStrokes`]: the overlay contains no stroke pixels.
/// - [`SegmentError::NoRegions`]: strokes enclose nothing (or nothing
///   survived the area filter).
pub fn segment_from_strokes(
    overlay: &RasterBuffer,
    config: &SegmentationConfig,
) -> SegmentResult<Segmentation> {
    let strokes = classify(overlay, ClassifyMode::AlphaCutoff(config.alpha_cutoff));
    if strokes.count() == 0 {
        return Err(SegmentError::NoStrokes);
    }
    debug!("segment: {} stroke pixels", strokes.count());

    let extended = close_borders(&strokes);
    let exterior = fill_exterior(&extended);

    let mut ctx = SegmentationContext::new(strokes, exterior)?;
    let cell_count = label_regions(&mut ctx, config.min_region_area);
    if cell_count == 0 {
        return Err(SegmentError::NoRegions);
    }

    let passes = absorb_boundaries(&mut ctx, config.absorption_pass_cap);
    debug!("segment: {} cells, {} absorption passes", cell_count, passes);

    let labels = ctx.into_labels();
    let stats = region_stats(&labels);
    Ok(Segmentation {
        labels,
        cell_count,
        stats,
    })
}

/// Split touching objects in a binary image.
///
/// Stages: strict binary gate, polarity detection from the four corner
/// pixels, distance transform, smoothing, seeded watershed flood,
/// recoloring. The output keeps the input's polarity convention:
/// bright corners mean background stays white and objects are drawn
/// black, dark corners the opposite. Separation lines take the
/// background color.
///
/// # Errors
///
/// Returns [`SegmentError::NotBinary`] if any sample is not 0 or 255.
pub fn watershed_split(raster: &RasterBuffer) -> SegmentResult<RasterBuffer> {
    check_binary(raster)?;

    let background_is_white = raster.corner_mean() > 127.5;
    let (fg_color, bg_color) = if background_is_white { (0, 255) } else { (255, 0) };
    debug!(
        "watershed: background-is-{} convention",
        if background_is_white { "white" } else { "black" }
    );

    let width = raster.width();
    let height = raster.height();
    let mut foreground = BinaryGrid::new(width, height).expect("raster dimensions are valid");
    for y in 0..height {
        for x in 0..width {
            if raster.gray(x, y) == fg_color {
                foreground.set_unchecked(x, y, true);
            }
        }
    }

    let distance = smooth_distance(&distance_transform(&foreground));
    let labels = flood_from_maxima(&foreground, &distance);

    let mut out = RasterBuffer::new_filled(width, height, 1, bg_color)
        .expect("raster dimensions are valid");
    for y in 0..height {
        for x in 0..width {
            if matches!(labels.get_unchecked(x, y), CellLabel::Region(_)) {
                out.set_unchecked(x, y, 0, fg_color);
            }
        }
    }

    Ok(out)
}
