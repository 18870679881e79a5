//! Per-region measurements
//!
//! Downstream consumers (cell tables, palette rendering, export) want
//! area, bounds and centroid per labeled cell; computing them here in
//! one pass saves every consumer a scan over the label image.

use cytoseg_core::{CellLabel, LabelGrid, Rect};
use std::collections::HashMap;

/// Measurements for one labeled region.
#[derive(Debug, Clone)]
pub struct RegionStats {
    /// Region label
    pub label: u32,
    /// Number of pixels
    pub pixel_count: u32,
    /// Bounding box
    pub bounds: Rect,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
}

#[derive(Default)]
struct Accum {
    count: u32,
    sum_x: u64,
    sum_y: u64,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

/// Compute statistics for every region in a label image, sorted by
/// label. Contested and empty cells contribute nothing.
pub fn region_stats(labels: &LabelGrid) -> Vec<RegionStats> {
    let mut accums: HashMap<u32, Accum> = HashMap::new();

    for y in 0..labels.height() {
        for x in 0..labels.width() {
            let CellLabel::Region(label) = labels.get_unchecked(x, y) else {
                continue;
            };
            let acc = accums.entry(label).or_insert_with(|| Accum {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
                ..Accum::default()
            });
            acc.count += 1;
            acc.sum_x += u64::from(x);
            acc.sum_y += u64::from(y);
            acc.min_x = acc.min_x.min(x);
            acc.min_y = acc.min_y.min(y);
            acc.max_x = acc.max_x.max(x);
            acc.max_y = acc.max_y.max(y);
        }
    }

    let mut stats: Vec<RegionStats> = accums
        .into_iter()
        .map(|(label, acc)| RegionStats {
            label,
            pixel_count: acc.count,
            bounds: Rect::new_unchecked(
                acc.min_x as i32,
                acc.min_y as i32,
                (acc.max_x - acc.min_x + 1) as i32,
                (acc.max_y - acc.min_y + 1) as i32,
            ),
            centroid_x: acc.sum_x as f64 / f64::from(acc.count),
            centroid_y: acc.sum_y as f64 / f64::from(acc.count),
        })
        .collect();

    stats.sort_by_key(|s| s.label);
    stats
}
