//! cytoseg-core - Core data structures for the cytoseg segmentation engine
//!
//! This crate provides the grid types every pipeline stage reads and
//! writes:
//!
//! - [`RasterBuffer`] - width x height pixels, 1-4 interleaved u8 channels
//! - [`BinaryGrid`] - one boolean per pixel (stroke / foreground masks)
//! - [`LabelGrid`] - per-pixel region identifiers with the [`CellLabel`]
//!   typed view over the dense integer encoding
//! - [`DistanceMap`] - floating-point chamfer distances
//! - [`Rect`] - validated integer rectangles for region bounds
//!
//! Every operation in the engine reads its inputs and writes into a
//! freshly allocated output; no buffer is mutated in place across stage
//! boundaries.
//!
//! # Examples
//!
//! ```
//! use cytoseg_core::{BinaryGrid, RasterBuffer};
//!
//! let raster = RasterBuffer::new_filled(100, 100, 1, 255).unwrap();
//! assert!(raster.is_binary());
//!
//! let mut grid = BinaryGrid::new(100, 100).unwrap();
//! grid.set(50, 50, true).unwrap();
//! assert_eq!(grid.count(), 1);
//! ```

mod distmap;
mod error;
mod grid;
mod label;
mod raster;
mod rect;

pub use distmap::DistanceMap;
pub use error::{CoreError, CoreResult};
pub use grid::BinaryGrid;
pub use label::{CellLabel, LabelGrid};
pub use raster::RasterBuffer;
pub use rect::Rect;
