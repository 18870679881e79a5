//! Error types for cytoseg-region

use cytoseg_morph::MorphError;
use thiserror::Error;

/// Errors that can occur during segmentation
///
/// Everything here is recoverable and user-actionable; a failed
/// segmentation leaves the input untouched and yields no new labels.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cytoseg_core::CoreError),

    /// The overlay contains no stroke pixels; nothing to segment.
    #[error("no stroke pixels found in overlay")]
    NoStrokes,

    /// Strokes were found but enclose no region (or none survived the
    /// minimum-area filter).
    #[error("no enclosed regions found")]
    NoRegions,

    /// The watershed input is not strictly binary. The caller should
    /// binarize first.
    #[error("input is not a binary image (found sample {found} at ({x}, {y}))")]
    NotBinary { x: u32, y: u32, found: u8 },
}

impl From<MorphError> for SegmentError {
    fn from(err: MorphError) -> Self {
        match err {
            MorphError::NotBinary { x, y, found } => SegmentError::NotBinary { x, y, found },
            MorphError::Core(core) => SegmentError::Core(core),
        }
    }
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
