//! Mask pre-cleaning between binarization and the watershed split
//!
//! Thresholded microscopy images tend to leave pinholes inside cell
//! bodies (which the distance transform would treat as background) and
//! partial cells cut off by the frame edge (which no measurement should
//! count). Both cleanups reuse the exterior flood.

use crate::exterior::fill_exterior;
use cytoseg_core::BinaryGrid;
use std::collections::VecDeque;

/// Fill interior holes: background regions not reachable from the
/// border become foreground.
pub fn fill_holes(mask: &BinaryGrid) -> BinaryGrid {
    let width = mask.width();
    let height = mask.height();

    // Exterior flood treats set cells as walls, which is exactly the
    // reachability we need here.
    let exterior = fill_exterior(mask);

    let mut out = BinaryGrid::new(width, height).expect("mask dimensions are valid");
    for y in 0..height {
        for x in 0..width {
            if mask.get_unchecked(x, y) || !exterior.get_unchecked(x, y) {
                out.set_unchecked(x, y, true);
            }
        }
    }
    out
}

/// Remove foreground objects touching the image border.
///
/// 4-connected flood from every set border cell; everything reached is
/// cleared.
pub fn clear_border_objects(mask: &BinaryGrid) -> BinaryGrid {
    let width = mask.width();
    let height = mask.height();

    let mut doomed = BinaryGrid::new(width, height).expect("mask dimensions are valid");
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();

    let try_seed = |x: u32, y: u32, doomed: &mut BinaryGrid, queue: &mut VecDeque<(u32, u32)>| {
        if mask.get_unchecked(x, y) && !doomed.get_unchecked(x, y) {
            doomed.set_unchecked(x, y, true);
            queue.push_back((x, y));
        }
    };

    for x in 0..width {
        try_seed(x, 0, &mut doomed, &mut queue);
        try_seed(x, height - 1, &mut doomed, &mut queue);
    }
    for y in 0..height {
        try_seed(0, y, &mut doomed, &mut queue);
        try_seed(width - 1, y, &mut doomed, &mut queue);
    }

    while let Some((x, y)) = queue.pop_front() {
        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if nx >= width || ny >= height {
                continue;
            }
            if mask.get_unchecked(nx, ny) && !doomed.get_unchecked(nx, ny) {
                doomed.set_unchecked(nx, ny, true);
                queue.push_back((nx, ny));
            }
        }
    }

    let mut out = mask.clone();
    for y in 0..height {
        for x in 0..width {
            if doomed.get_unchecked(x, y) {
                out.set_unchecked(x, y, false);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_holes() {
        // Ring with a hole in the middle.
        let mut mask = BinaryGrid::new(7, 7).unwrap();
        for i in 2..=4 {
            mask.set(i, 2, true).unwrap();
            mask.set(i, 4, true).unwrap();
            mask.set(2, i, true).unwrap();
            mask.set(4, i, true).unwrap();
        }

        let filled = fill_holes(&mask);
        assert_eq!(filled.get(3, 3), Some(true));
        assert_eq!(filled.get(0, 0), Some(false));
        assert_eq!(filled.count(), 9);
    }

    #[test]
    fn test_clear_border_objects() {
        let mut mask = BinaryGrid::new(8, 8).unwrap();
        // Object leaking off the left edge.
        mask.set(0, 3, true).unwrap();
        mask.set(1, 3, true).unwrap();
        // Interior object.
        mask.set(4, 4, true).unwrap();
        mask.set(5, 4, true).unwrap();

        let cleared = clear_border_objects(&mask);
        assert_eq!(cleared.get(0, 3), Some(false));
        assert_eq!(cleared.get(1, 3), Some(false));
        assert_eq!(cleared.get(4, 4), Some(true));
        assert_eq!(cleared.count(), 2);
    }

    #[test]
    fn test_solid_mask_untouched_by_fill() {
        let mut mask = BinaryGrid::new(4, 4).unwrap();
        mask.set(1, 1, true).unwrap();
        let filled = fill_holes(&mask);
        assert_eq!(filled.count(), 1);
    }
}
