//! Error types for cytoseg-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cytoseg_core::CoreError),

    /// Input is not strictly binary (a sample other than 0 or 255 was
    /// found). Recoverable: the caller should binarize first.
    #[error("input is not a binary image (found sample {found} at ({x}, {y}))")]
    NotBinary { x: u32, y: u32, found: u8 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
