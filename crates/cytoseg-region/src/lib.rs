//! cytoseg-region - Region segmentation for cell-microscopy rasters
//!
//! This crate holds both segmentation pipelines of the engine:
//!
//! - **Manual**: painted boundary strokes to a label image - stroke
//!   classification, border closure, exterior fill, connected-component
//!   labeling with area filtering, boundary absorption
//! - **Automatic**: a binarized image to separated objects - chamfer
//!   distance transform, smoothing, seeded watershed flood
//!
//! Plus the mask pre-cleaning helpers (hole filling, border-object
//! removal) and per-region measurements.
//!
//! # Examples
//!
//! ## Segmenting a stroke overlay
//!
//! ```
//! use cytoseg_core::RasterBuffer;
//! use cytoseg_region::{SegmentationConfig, SegmentError, segment_from_strokes};
//!
//! let overlay = RasterBuffer::new(64, 64, 4).unwrap();
//! // Nothing painted yet: a user-actionable outcome, not a crash.
//! let result = segment_from_strokes(&overlay, &SegmentationConfig::default());
//! assert!(matches!(result, Err(SegmentError::NoStrokes)));
//! ```
//!
//! ## Splitting touching blobs
//!
//! ```
//! use cytoseg_core::RasterBuffer;
//! use cytoseg_region::watershed_split;
//!
//! let binary = RasterBuffer::new_filled(32, 32, 1, 255).unwrap();
//! let split = watershed_split(&binary).unwrap();
//! assert!(split.is_binary());
//! ```

mod absorb;
mod closure;
mod config;
mod context;
mod distance;
mod error;
mod exterior;
mod holes;
mod labeler;
mod pipeline;
mod stats;
mod watershed;

// Re-export core types
pub use cytoseg_core;

// Re-export error types
pub use error::{SegmentError, SegmentResult};

// Re-export configuration and context
pub use config::{DEFAULT_ABSORPTION_PASS_CAP, DEFAULT_MIN_REGION_AREA, SegmentationConfig};
pub use context::SegmentationContext;

// Re-export pipeline stages
pub use absorb::absorb_boundaries;
pub use closure::{EDGE_BAND, close_borders};
pub use exterior::fill_exterior;
pub use labeler::label_regions;

// Re-export distance and watershed
pub use distance::{DIAGONAL_STEP, distance_transform, smooth_distance};
pub use watershed::flood_from_maxima;

// Re-export mask cleanup helpers
pub use holes::{clear_border_objects, fill_holes};

// Re-export measurements and the pipelines
pub use pipeline::{Segmentation, segment_from_strokes, watershed_split};
pub use stats::{RegionStats, region_stats};
