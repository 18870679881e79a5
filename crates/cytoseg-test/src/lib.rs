//! cytoseg-test - Regression test framework for cytoseg
//!
//! A small harness for the `*_reg.rs` integration tests, supporting
//! three modes:
//!
//! - **Generate**: create golden files for later comparison
//! - **Compare**: compare results with golden files (default)
//! - **Display**: run without comparison (manual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use cytoseg_test::RegParams;
//!
//! let mut rp = RegParams::new("watershed");
//! rp.compare_values(2.0, label_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root.
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // cytoseg-test is at crates/cytoseg-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
