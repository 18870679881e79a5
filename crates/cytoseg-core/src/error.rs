//! Error types for cytoseg-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid channel count (must be 1..=4)
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Buffer length does not match dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Grid dimension mismatch between pipeline stages
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Zero-area or inverted rectangle bounds
    #[error("degenerate geometry: {w}x{h} at ({x}, {y})")]
    DegenerateGeometry { x: i32, y: i32, w: i32, h: i32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
