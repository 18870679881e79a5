//! Chamfer distance transform and smoothing
//!
//! Two raster sweeps approximate the Euclidean distance from each
//! foreground pixel to the nearest background pixel: the forward pass
//! relaxes from the already-visited N/NW/NE/W neighbors, the backward
//! pass from S/SE/SW/E. Axis steps cost 1, diagonal steps sqrt(2). This
//! is a chamfer approximation, not exact Euclidean distance; it is
//! accurate enough for seed finding and nothing here should be read as
//! exact EDM.
//!
//! The raw chamfer surface is terraced, and every terrace corner is a
//! spurious local maximum that would become a watershed seed. The
//! weighted 3x3 smoothing pass is therefore a required stage of the
//! split pipeline, not optional polish.

use cytoseg_core::{BinaryGrid, DistanceMap};

/// Cost of a diagonal step in chamfer units.
pub const DIAGONAL_STEP: f32 = std::f32::consts::SQRT_2;

/// Compute the distance-to-background map of a foreground mask.
///
/// Background cells carry 0. Foreground cells with no background
/// anywhere in the image keep a large finite value.
pub fn distance_transform(foreground: &BinaryGrid) -> DistanceMap {
    let width = foreground.width();
    let height = foreground.height();

    let mut map = DistanceMap::new(width, height).expect("mask dimensions are valid");

    // Background stays 0; foreground starts beyond any reachable distance.
    let sentinel = 2.0 * width as f32 * height as f32;
    for y in 0..height {
        for x in 0..width {
            if foreground.get_unchecked(x, y) {
                map.set_unchecked(x, y, sentinel);
            }
        }
    }

    // Forward pass: N, NW, NE, W are final for the current cell.
    for y in 0..height {
        for x in 0..width {
            if !foreground.get_unchecked(x, y) {
                continue;
            }
            let mut best = map.get_unchecked(x, y);
            if x > 0 {
                best = best.min(map.get_unchecked(x - 1, y) + 1.0);
            }
            if y > 0 {
                best = best.min(map.get_unchecked(x, y - 1) + 1.0);
                if x > 0 {
                    best = best.min(map.get_unchecked(x - 1, y - 1) + DIAGONAL_STEP);
                }
                if x + 1 < width {
                    best = best.min(map.get_unchecked(x + 1, y - 1) + DIAGONAL_STEP);
                }
            }
            map.set_unchecked(x, y, best);
        }
    }

    // Backward pass: S, SE, SW, E.
    for y in (0..height).rev() {
        for x in (0..width).rev() {
            if !foreground.get_unchecked(x, y) {
                continue;
            }
            let mut best = map.get_unchecked(x, y);
            if x + 1 < width {
                best = best.min(map.get_unchecked(x + 1, y) + 1.0);
            }
            if y + 1 < height {
                best = best.min(map.get_unchecked(x, y + 1) + 1.0);
                if x + 1 < width {
                    best = best.min(map.get_unchecked(x + 1, y + 1) + DIAGONAL_STEP);
                }
                if x > 0 {
                    best = best.min(map.get_unchecked(x - 1, y + 1) + DIAGONAL_STEP);
                }
            }
            map.set_unchecked(x, y, best);
        }
    }

    map
}

/// Smooth a distance map with a weighted 3x3 kernel.
///
/// Weights: center 4, axis neighbors 2, diagonals 1, divisor 16.
/// Out-of-bounds neighbors mirror the center value, so edge cells are
/// averaged against themselves rather than pulled toward zero.
pub fn smooth_distance(map: &DistanceMap) -> DistanceMap {
    let width = map.width();
    let height = map.height();

    let mut out = DistanceMap::new(width, height).expect("map dimensions are valid");

    for y in 0..height {
        for x in 0..width {
            let center = map.get_unchecked(x, y);
            let mut sum = 0.0f32;

            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let weight = match (dx, dy) {
                        (0, 0) => 4.0,
                        (0, _) | (_, 0) => 2.0,
                        _ => 1.0,
                    };
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    let value =
                        if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                            center
                        } else {
                            map.get_unchecked(nx as u32, ny as u32)
                        };
                    sum += weight * value;
                }
            }

            out.set_unchecked(x, y, sum / 16.0);
        }
    }

    out
}
