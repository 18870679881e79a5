//! Watershed split regression test
//!
//! Two touching circular blobs must come out as two distinct labels
//! separated by a connected one-pixel boundary line; a single isolated
//! blob must keep exactly one label and no internal line. The raster
//! surface must preserve the input polarity and refuse grayscale input.
//!
//! Run with:
//! ```
//! cargo test -p cytoseg-region --test watershed_reg
//! ```

use cytoseg_core::{BinaryGrid, CellLabel, LabelGrid, RasterBuffer};
use cytoseg_region::{SegmentError, distance_transform, flood_from_maxima, smooth_distance, watershed_split};
use cytoseg_test::RegParams;
use std::collections::HashSet;

fn disc_mask(width: u32, height: u32, centers: &[(i32, i32)], radius: i32) -> BinaryGrid {
    let mut grid = BinaryGrid::new(width, height).unwrap();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            for &(cx, cy) in centers {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= radius * radius {
                    grid.set(x as u32, y as u32, true).unwrap();
                }
            }
        }
    }
    grid
}

fn run_flood(mask: &BinaryGrid) -> LabelGrid {
    let map = smooth_distance(&distance_transform(mask));
    flood_from_maxima(mask, &map)
}

fn distinct_labels(labels: &LabelGrid) -> HashSet<u32> {
    labels
        .data()
        .iter()
        .filter(|&&raw| raw > 0)
        .map(|&raw| raw as u32)
        .collect()
}

fn contested_cells(labels: &LabelGrid) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for y in 0..labels.height() {
        for x in 0..labels.width() {
            if labels.get_unchecked(x, y) == CellLabel::Contested {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// Number of 8-connected components in a set of cells.
fn component_count(cells: &[(u32, u32)]) -> usize {
    let set: HashSet<(u32, u32)> = cells.iter().copied().collect();
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut components = 0;

    for &start in cells {
        if seen.contains(&start) {
            continue;
        }
        components += 1;
        let mut stack = vec![start];
        seen.insert(start);
        while let Some((x, y)) = stack.pop() {
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 {
                        continue;
                    }
                    let neighbor = (nx as u32, ny as u32);
                    if set.contains(&neighbor) && seen.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }
    }
    components
}

#[test]
fn watershed_touching_blobs_split() {
    let mut rp = RegParams::new("watershed");

    // Two discs of radius 12 with centers 20 px apart: one connected
    // component with two clear distance maxima.
    let mask = disc_mask(70, 40, &[(24, 20), (44, 20)], 12);
    let labels = run_flood(&mask);

    let label_set = distinct_labels(&labels);
    eprintln!("  labels: {:?}", label_set);
    rp.compare_values(2.0, label_set.len() as f64, 0.0);

    let boundary = contested_cells(&labels);
    eprintln!("  boundary pixels: {}", boundary.len());
    rp.compare_bool(true, !boundary.is_empty());

    // The separation line is one connected chain crossing the neck.
    rp.compare_values(1.0, component_count(&boundary) as f64, 0.0);

    // Boundary pixels live strictly inside the original foreground.
    let on_fg = boundary.iter().all(|&(x, y)| mask.get_unchecked(x, y));
    rp.compare_bool(true, on_fg);

    assert!(rp.cleanup(), "watershed regression test failed");
}

#[test]
fn watershed_isolated_blob_stays_whole() {
    let mut rp = RegParams::new("watershed_single");

    let mask = disc_mask(40, 40, &[(20, 20)], 12);
    let labels = run_flood(&mask);

    rp.compare_values(1.0, distinct_labels(&labels).len() as f64, 0.0);
    rp.compare_values(0.0, contested_cells(&labels).len() as f64, 0.0);

    // Every foreground pixel was claimed.
    let mut claimed = true;
    for y in 0..40 {
        for x in 0..40 {
            if mask.get_unchecked(x, y)
                && labels.get_unchecked(x, y) == CellLabel::Empty
            {
                claimed = false;
            }
        }
    }
    rp.compare_bool(true, claimed);

    assert!(rp.cleanup(), "watershed single blob test failed");
}

#[test]
fn watershed_split_raster_surface() {
    let mut rp = RegParams::new("watershed_raster");

    // Dark objects on a white background.
    let mut raster = RasterBuffer::new_filled(70, 40, 1, 255).unwrap();
    let mask = disc_mask(70, 40, &[(24, 20), (44, 20)], 12);
    for y in 0..40 {
        for x in 0..70 {
            if mask.get_unchecked(x, y) {
                raster.set_unchecked(x, y, 0, 0);
            }
        }
    }

    let out = watershed_split(&raster).expect("watershed_split failed");
    rp.compare_bool(true, out.is_binary());

    // Polarity preserved: background white, objects black.
    rp.compare_values(255.0, f64::from(out.get_unchecked(0, 0, 0)), 0.0);
    rp.compare_values(0.0, f64::from(out.get_unchecked(24, 20, 0)), 0.0);
    rp.compare_values(0.0, f64::from(out.get_unchecked(44, 20, 0)), 0.0);

    // The separation line takes the background color, so the two
    // objects are no longer one white-complement component.
    let split_fg: usize = out.data().iter().filter(|&&v| v == 0).count();
    let original_fg = mask.count();
    eprintln!("  fg before {} after {}", original_fg, split_fg);
    rp.compare_bool(true, split_fg < original_fg);

    // Inverted polarity: bright objects on black stay bright.
    let mut inverted = RasterBuffer::new_filled(70, 40, 1, 0).unwrap();
    for y in 0..40 {
        for x in 0..70 {
            if mask.get_unchecked(x, y) {
                inverted.set_unchecked(x, y, 0, 255);
            }
        }
    }
    let out = watershed_split(&inverted).expect("watershed_split failed");
    rp.compare_values(0.0, f64::from(out.get_unchecked(0, 0, 0)), 0.0);
    rp.compare_values(255.0, f64::from(out.get_unchecked(24, 20, 0)), 0.0);

    assert!(rp.cleanup(), "watershed raster surface test failed");
}

#[test]
fn watershed_error_handling() {
    let mut rp = RegParams::new("watershed_errors");

    // Grayscale input is refused with the typed NotBinary outcome.
    let gray = RasterBuffer::new_filled(20, 20, 1, 128).unwrap();
    let result = watershed_split(&gray);
    rp.compare_bool(true, matches!(result, Err(SegmentError::NotBinary { .. })));

    // A single bad sample is enough, and its position is reported.
    let mut nearly = RasterBuffer::new_filled(20, 20, 1, 255).unwrap();
    nearly.set(3, 5, 0, 254).unwrap();
    let result = watershed_split(&nearly);
    rp.compare_bool(
        true,
        matches!(result, Err(SegmentError::NotBinary { x: 3, y: 5, found: 254 })),
    );

    // An image too small for interior seeds is a no-op, not an error.
    let tiny = RasterBuffer::new_filled(2, 2, 1, 0).unwrap();
    let result = watershed_split(&tiny);
    rp.compare_bool(true, result.is_ok());

    assert!(rp.cleanup(), "watershed error handling test failed");
}
