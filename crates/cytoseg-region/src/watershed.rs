//! Seeded watershed - splitting touching objects
//!
//! Seeds are the local maxima of the smoothed distance map: every
//! strictly-interior foreground pixel none of whose 8 neighbors has a
//! strictly greater distance. A maximum adjacent to an already-labeled
//! maximum adopts that label, which merges plateau maxima into a single
//! seed instead of shattering a flat-topped object.
//!
//! The flood then expands every seed's label outward through foreground
//! pixels in FIFO insertion order. FIFO is an approximation of a true
//! priority-by-decreasing-distance flood; it is the observed behavior of
//! this engine and is kept as such - replacing it with a heap changes
//! the output on ambiguous plateaus and must be revalidated, so do not
//! quietly "fix" it. Where two floods meet, the already-labeled pixel is
//! converted to a contested cell: the permanent one-pixel separation
//! line between touching objects.

use cytoseg_core::{BinaryGrid, CellLabel, DistanceMap, LabelGrid};
use log::debug;
use std::collections::VecDeque;

const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Flood a foreground mask from the local maxima of its distance map.
///
/// Returns the label image: `Region` for claimed object pixels,
/// `Contested` for separation lines, `Empty` for background (and for
/// foreground never reached by any seed, such as masks too small to
/// have interior pixels - those render as background downstream).
pub fn flood_from_maxima(foreground: &BinaryGrid, distance: &DistanceMap) -> LabelGrid {
    let width = foreground.width();
    let height = foreground.height();

    let mut labels = LabelGrid::new(width, height).expect("mask dimensions are valid");
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
    let mut next_label = 0u32;

    // Seed detection over the strict interior.
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if !foreground.get_unchecked(x, y) {
                continue;
            }
            let here = distance.get_unchecked(x, y);

            let is_maximum = NEIGHBORS_8.iter().all(|&(dx, dy)| {
                let nx = (x as i32 + dx) as u32;
                let ny = (y as i32 + dy) as u32;
                distance.get_unchecked(nx, ny) <= here
            });
            if !is_maximum {
                continue;
            }

            // Adopt a neighboring seed's label when the plateau already
            // has one; otherwise open a new region.
            let adopted = NEIGHBORS_8.iter().find_map(|&(dx, dy)| {
                let nx = (x as i32 + dx) as u32;
                let ny = (y as i32 + dy) as u32;
                labels.get_unchecked(nx, ny).region()
            });
            let label = adopted.unwrap_or_else(|| {
                next_label += 1;
                next_label
            });

            labels.set_unchecked(x, y, CellLabel::Region(label));
            queue.push_back((x, y));
        }
    }

    debug!("watershed: {} seed labels", next_label);

    // FIFO flood; see module docs for why this is not a priority queue.
    while let Some((x, y)) = queue.pop_front() {
        let CellLabel::Region(label) = labels.get_unchecked(x, y) else {
            // Converted to a separation line while waiting in the queue.
            continue;
        };

        for &(dx, dy) in &NEIGHBORS_8 {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if !foreground.get_unchecked(nx, ny) {
                continue;
            }

            match labels.get_unchecked(nx, ny) {
                CellLabel::Empty => {
                    labels.set_unchecked(nx, ny, CellLabel::Region(label));
                    queue.push_back((nx, ny));
                }
                CellLabel::Region(other) if other != label => {
                    // Two floods collide: the contact pixel becomes a
                    // permanent boundary.
                    labels.set_unchecked(nx, ny, CellLabel::Contested);
                }
                _ => {}
            }
        }
    }

    labels
}
