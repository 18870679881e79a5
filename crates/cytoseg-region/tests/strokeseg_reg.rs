//! Stroke segmentation regression test
//!
//! The canonical scenario: a 100x100 transparent overlay with a single
//! stroked circle of radius 20 centered at (50, 50) - stroke pixels
//! only, nothing filled. The pipeline must find exactly one cell
//! covering the interior (~pi * 20^2 = 1257 px, give or take the stroke
//! width), leave the remaining ~8743 px as exterior, and absorb every
//! stroke pixel into the cell.
//!
//! Run with:
//! ```
//! cargo test -p cytoseg-region --test strokeseg_reg
//! ```

use cytoseg_binarize::{ClassifyMode, classify};
use cytoseg_core::{CellLabel, RasterBuffer};
use cytoseg_region::{
    SegmentError, SegmentationConfig, close_borders, fill_exterior, segment_from_strokes,
};
use cytoseg_test::RegParams;

/// Paint a circle outline into the alpha channel of an RGBA overlay.
fn stroke_circle(overlay: &mut RasterBuffer, cx: f64, cy: f64, radius: f64) {
    let steps = (radius * 48.0) as u32;
    for i in 0..steps {
        let angle = f64::from(i) / f64::from(steps) * std::f64::consts::TAU;
        let x = (cx + radius * angle.cos()).round() as i64;
        let y = (cy + radius * angle.sin()).round() as i64;
        if x >= 0 && y >= 0 && (x as u32) < overlay.width() && (y as u32) < overlay.height() {
            overlay.set_unchecked(x as u32, y as u32, 3, 255);
        }
    }
}

#[test]
fn strokeseg_circle_scenario() {
    let mut rp = RegParams::new("strokeseg");

    let mut overlay = RasterBuffer::new(100, 100, 4).unwrap();
    stroke_circle(&mut overlay, 50.0, 50.0, 20.0);

    let strokes = classify(&overlay, ClassifyMode::default());
    let stroke_count = strokes.count();
    eprintln!("  stroke pixels: {}", stroke_count);
    rp.compare_bool(true, stroke_count > 0);

    let segmentation =
        segment_from_strokes(&overlay, &SegmentationConfig::default()).expect("segmentation failed");

    // Exactly one cell.
    rp.compare_values(1.0, f64::from(segmentation.cell_count), 0.0);
    rp.compare_values(1.0, segmentation.stats.len() as f64, 0.0);

    // The labeled area is the circle interior plus the absorbed stroke
    // ring: pi * 20^2 = 1257, stroke width one pixel either way.
    let labeled = segmentation.labels.labeled_count();
    eprintln!("  labeled pixels: {}", labeled);
    rp.compare_values(1257.0, labeled as f64, 150.0);

    // The exterior covers everything else.
    let exterior = fill_exterior(&close_borders(&strokes));
    eprintln!("  exterior pixels: {}", exterior.count());
    rp.compare_values(8743.0, exterior.count() as f64, 150.0);

    // Full absorption: no stroke pixel left unlabeled.
    let mut unresolved = 0;
    for y in 0..100 {
        for x in 0..100 {
            if strokes.get_unchecked(x, y)
                && segmentation.labels.get_unchecked(x, y) == CellLabel::Empty
            {
                unresolved += 1;
            }
        }
    }
    rp.compare_values(0.0, f64::from(unresolved), 0.0);

    // The centroid sits at the circle center.
    let stats = &segmentation.stats[0];
    rp.compare_values(50.0, stats.centroid_x, 1.0);
    rp.compare_values(50.0, stats.centroid_y, 1.0);

    assert!(rp.cleanup(), "strokeseg regression test failed");
}

#[test]
fn strokeseg_exterior_never_crosses_strokes() {
    let mut rp = RegParams::new("strokeseg_exterior");

    let mut overlay = RasterBuffer::new(60, 60, 4).unwrap();
    stroke_circle(&mut overlay, 30.0, 30.0, 14.0);
    let strokes = classify(&overlay, ClassifyMode::default());
    let visited = fill_exterior(&close_borders(&strokes));

    // No stroke pixel is ever visited.
    let mut overlap = 0;
    for y in 0..60 {
        for x in 0..60 {
            if strokes.get_unchecked(x, y) && visited.get_unchecked(x, y) {
                overlap += 1;
            }
        }
    }
    rp.compare_values(0.0, f64::from(overlap), 0.0);

    // Every border pixel is either stroke or visited, and the enclosed
    // center is neither.
    let mut border_ok = true;
    for i in 0..60 {
        for (x, y) in [(i, 0), (i, 59), (0, i), (59, i)] {
            if !strokes.get_unchecked(x, y) && !visited.get_unchecked(x, y) {
                border_ok = false;
            }
        }
    }
    rp.compare_bool(true, border_ok);
    rp.compare_bool(false, visited.get_unchecked(30, 30));

    assert!(rp.cleanup(), "strokeseg exterior test failed");
}

#[test]
fn strokeseg_empty_and_open_inputs() {
    let mut rp = RegParams::new("strokeseg_errors");

    // Untouched overlay: NoStrokes.
    let overlay = RasterBuffer::new(50, 50, 4).unwrap();
    let result = segment_from_strokes(&overlay, &SegmentationConfig::default());
    rp.compare_bool(true, matches!(result, Err(SegmentError::NoStrokes)));

    // An open arc encloses nothing: NoRegions.
    let mut overlay = RasterBuffer::new(50, 50, 4).unwrap();
    for x in 10..40 {
        overlay.set(x, 25, 3, 255).unwrap();
    }
    let result = segment_from_strokes(&overlay, &SegmentationConfig::default());
    rp.compare_bool(true, matches!(result, Err(SegmentError::NoRegions)));

    // A region below the minimum area: NoRegions as well.
    let mut overlay = RasterBuffer::new(50, 50, 4).unwrap();
    stroke_circle(&mut overlay, 25.0, 25.0, 5.0);
    let config = SegmentationConfig::default().with_min_region_area(250);
    let result = segment_from_strokes(&overlay, &config);
    rp.compare_bool(true, matches!(result, Err(SegmentError::NoRegions)));

    // The same strokes pass with the filter off.
    let config = SegmentationConfig::default().with_min_region_area(0);
    rp.compare_bool(true, segment_from_strokes(&overlay, &config).is_ok());

    assert!(rp.cleanup(), "strokeseg error handling test failed");
}
