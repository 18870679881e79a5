//! cytoseg-binarize - Pixel classification and automatic thresholding
//!
//! This crate turns raw rasters into boolean grids:
//!
//! - **Classification** - stroke detection on painted overlays (alpha
//!   cutoff) and foreground detection on grayscale images (fixed or
//!   automatic cutoff)
//! - **Otsu thresholding** - global between-class-variance threshold
//!   selection, with a documented downward bias toward foreground
//!
//! None of these operations can fail: a classifier that matches nothing
//! returns an empty grid, and a uniform image thresholds at 0. The
//! caller distinguishes "nothing found" with
//! [`BinaryGrid::count`](cytoseg_core::BinaryGrid::count).
//!
//! # Examples
//!
//! ```
//! use cytoseg_binarize::{ClassifyMode, classify};
//! use cytoseg_core::RasterBuffer;
//!
//! let overlay = RasterBuffer::new(64, 64, 4).unwrap();
//! let strokes = classify(&overlay, ClassifyMode::default());
//! assert_eq!(strokes.count(), 0); // nothing painted
//! ```

mod classify;
mod otsu;

pub use classify::{ClassifyMode, DEFAULT_ALPHA_CUTOFF, classify};
pub use otsu::{FOREGROUND_BIAS, otsu_threshold, threshold_to_binary};
