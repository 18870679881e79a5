//! Border closure - sealing stroke gaps along the image edges
//!
//! A stroke that runs to the image border on both ends (a U against the
//! edge) should enclose a region without the user tracing along the
//! border. For each edge, stroke pixels within a small band are
//! collected in order along that edge and the outermost edge row or
//! column between consecutive touch points is marked as stroke.
//!
//! The extended grid exists only for exterior detection; closure pixels
//! are not real strokes and the original grid is kept for labeling.

use cytoseg_core::BinaryGrid;

/// Depth of the band scanned for edge touch points, in pixels.
pub const EDGE_BAND: u32 = 2;

/// Close stroke gaps along the four image edges.
///
/// Returns the extended grid; the input is not modified. An edge with
/// fewer than two touch points gets no closure.
pub fn close_borders(strokes: &BinaryGrid) -> BinaryGrid {
    let width = strokes.width();
    let height = strokes.height();
    let band_y = EDGE_BAND.min(height);
    let band_x = EDGE_BAND.min(width);

    let mut extended = strokes.clone();

    // Top and bottom edges: touch points ordered by x.
    let top: Vec<u32> = (0..width)
        .filter(|&x| (0..band_y).any(|y| strokes.get_unchecked(x, y)))
        .collect();
    let bottom: Vec<u32> = (0..width)
        .filter(|&x| (0..band_y).any(|y| strokes.get_unchecked(x, height - 1 - y)))
        .collect();

    for pair in top.windows(2) {
        for x in pair[0]..=pair[1] {
            extended.set_unchecked(x, 0, true);
        }
    }
    for pair in bottom.windows(2) {
        for x in pair[0]..=pair[1] {
            extended.set_unchecked(x, height - 1, true);
        }
    }

    // Left and right edges: touch points ordered by y.
    let left: Vec<u32> = (0..height)
        .filter(|&y| (0..band_x).any(|x| strokes.get_unchecked(x, y)))
        .collect();
    let right: Vec<u32> = (0..height)
        .filter(|&y| (0..band_x).any(|x| strokes.get_unchecked(width - 1 - x, y)))
        .collect();

    for pair in left.windows(2) {
        for y in pair[0]..=pair[1] {
            extended.set_unchecked(0, y, true);
        }
    }
    for pair in right.windows(2) {
        for y in pair[0]..=pair[1] {
            extended.set_unchecked(width - 1, y, true);
        }
    }

    extended
}
