//! Binarization regression test
//!
//! Checks the Otsu/classify round-trip: thresholding an already-binary
//! (0/255) image must be idempotent - the computed threshold reproduces
//! the same partition. Also exercises the lowest-tie policy and the
//! foreground bias.
//!
//! Run with:
//! ```
//! cargo test -p cytoseg-binarize --test binarize_reg
//! ```

use cytoseg_binarize::{ClassifyMode, FOREGROUND_BIAS, classify, otsu_threshold, threshold_to_binary};
use cytoseg_core::RasterBuffer;
use cytoseg_test::RegParams;

/// A 0/255 checkerboard-ish binary image.
fn binary_image(width: u32, height: u32) -> RasterBuffer {
    let mut raster = RasterBuffer::new(width, height, 1).unwrap();
    for y in 0..height {
        for x in 0..width {
            if (x / 4 + y / 4) % 2 == 0 {
                raster.set_unchecked(x, y, 0, 255);
            }
        }
    }
    raster
}

#[test]
fn binarize_idempotent_on_binary_input() {
    let mut rp = RegParams::new("binarize");

    let raster = binary_image(40, 40);
    let threshold = otsu_threshold(&raster);
    eprintln!("  threshold on 0/255 input: {}", threshold);

    // With only the values 0 and 255 present, every cut in [0, 254]
    // yields the same between-class variance; the scan keeps the first
    // (lowest) one, and the bias cannot move 0.
    rp.compare_values(0.0, f64::from(threshold), 0.0);

    let rebinarized = threshold_to_binary(&raster, threshold);
    rp.compare_bool(true, rebinarized.is_binary());
    rp.compare_bool(true, rebinarized.data() == raster.data());

    assert!(rp.cleanup(), "binarize regression test failed");
}

#[test]
fn binarize_bimodal_threshold_and_bias() {
    let mut rp = RegParams::new("binarize_bias");

    // Two spread clusters: one row per value in 40..=60 and 190..=210.
    let mut raster = RasterBuffer::new(21, 42, 1).unwrap();
    for y in 0..42 {
        let v = if y < 21 { 40 + y as u8 } else { 190 + (y as u8 - 21) };
        for x in 0..21 {
            raster.set_unchecked(x, y, 0, v);
        }
    }

    let threshold = otsu_threshold(&raster);
    eprintln!("  bimodal threshold: {}", threshold);

    // The raw cut lands at the top of the lower cluster (every cut in
    // the empty valley ties, and ties keep the lowest t); the published
    // value carries the foreground bias.
    let expected = f64::from((60.0f32 * FOREGROUND_BIAS) as u8);
    rp.compare_values(expected, f64::from(threshold), 0.0);

    // The biased cut pulls the top tail of the lower cluster into the
    // foreground - that is the point of the policy.
    let grid = classify(&raster, ClassifyMode::IntensityCutoff(threshold));
    let above_raw = 21 * 21; // the upper cluster
    rp.compare_bool(true, grid.count() > above_raw);
    rp.compare_values(504.0, grid.count() as f64, 0.0);

    assert!(rp.cleanup(), "binarize bias test failed");
}

#[test]
fn binarize_auto_matches_manual_threshold() {
    let mut rp = RegParams::new("binarize_auto");

    let raster = binary_image(24, 24);
    let threshold = otsu_threshold(&raster);

    let auto = classify(&raster, ClassifyMode::Auto);
    let manual = classify(&raster, ClassifyMode::IntensityCutoff(threshold));
    rp.compare_bool(true, auto == manual);
    rp.compare_values(
        raster.data().iter().filter(|&&v| v == 255).count() as f64,
        auto.count() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "binarize auto test failed");
}
