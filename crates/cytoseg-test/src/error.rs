//! Error types for cytoseg-test

use thiserror::Error;

/// Errors raised by the regression test framework
#[derive(Debug, Error)]
pub enum TestError {
    /// I/O error while reading or writing golden/regout files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test framework operations
pub type TestResult<T> = Result<T, TestError>;
