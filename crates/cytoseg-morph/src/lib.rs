//! cytoseg-morph - Strictly-binary morphology
//!
//! This crate provides the 3x3 morphological operations used to clean a
//! binarized microscopy image before segmentation:
//!
//! - **Erosion / dilation** - 3x3 minimum / maximum filters with
//!   replicate edge handling
//! - **Opening / closing** - speckle removal and pinhole filling
//! - **Boundary extraction** - one-pixel outlines of foreground objects
//!
//! All operations require strictly binary input (every sample 0 or 255)
//! and fail with the recoverable [`MorphError::NotBinary`] otherwise;
//! the host reacts by asking the user to binarize first.
//!
//! # Examples
//!
//! ```
//! use cytoseg_core::RasterBuffer;
//! use cytoseg_morph::{MorphOp, apply};
//!
//! let binary = RasterBuffer::new_filled(32, 32, 1, 255).unwrap();
//! let opened = apply(&binary, MorphOp::Open).unwrap();
//! assert!(opened.is_binary());
//!
//! let grayscale = RasterBuffer::new_filled(32, 32, 1, 128).unwrap();
//! assert!(apply(&grayscale, MorphOp::Open).is_err());
//! ```

pub mod binary;
mod error;

pub use binary::{MorphOp, apply, boundary, check_binary, close, dilate, erode, open};
pub use error::{MorphError, MorphResult};
