//! Cytoseg - Raster segmentation engine for cell-microscopy images
//!
//! Cytoseg turns painted boundary strokes, or a binarized grayscale
//! image, into a label image where each connected region is a distinct,
//! uniquely numbered cell.
//!
//! # Overview
//!
//! Two pipelines share the same primitives:
//!
//! - **Manual**: stroke classification, border closure, exterior fill,
//!   connected-component labeling with area filtering, boundary
//!   absorption ([`region::segment_from_strokes`])
//! - **Automatic**: chamfer distance transform, smoothing, seeded
//!   watershed with one-pixel separation lines
//!   ([`region::watershed_split`])
//!
//! Plus the supporting surface: Otsu auto-thresholding, strictly-binary
//! 3x3 morphology, mask cleanup, and per-cell measurements.
//!
//! # Example
//!
//! ```
//! use cytoseg::{RasterBuffer, region::watershed_split};
//!
//! // An all-white (empty) binary image splits into... nothing.
//! let binary = RasterBuffer::new_filled(64, 64, 1, 255).unwrap();
//! let split = watershed_split(&binary).unwrap();
//! assert!(split.is_binary());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use cytoseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use cytoseg_binarize as binarize;
pub use cytoseg_morph as morph;
pub use cytoseg_region as region;
