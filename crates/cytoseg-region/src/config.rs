//! Segmentation configuration
//!
//! One engine, one configuration. The host application historically ran
//! two near-duplicate stroke pipelines (with and without minimum-area
//! filtering, with and without boundary absorption); both are covered
//! here by a single [`SegmentationConfig`].

use cytoseg_binarize::DEFAULT_ALPHA_CUTOFF;

/// Default minimum region area in pixels.
///
/// Enclosed regions smaller than this are treated as noise, not cells.
pub const DEFAULT_MIN_REGION_AREA: usize = 250;

/// Default cap on boundary-absorption passes.
pub const DEFAULT_ABSORPTION_PASS_CAP: u32 = 64;

/// Options for the stroke segmentation pipeline
#[derive(Debug, Clone)]
pub struct SegmentationConfig {
    /// Alpha cutoff for stroke detection on the painted overlay.
    pub alpha_cutoff: u8,
    /// Minimum region area in pixels; 0 disables the filter (the legacy
    /// pipeline variant).
    pub min_region_area: usize,
    /// Maximum number of boundary-absorption passes; 0 disables
    /// absorption entirely.
    pub absorption_pass_cap: u32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
            min_region_area: DEFAULT_MIN_REGION_AREA,
            absorption_pass_cap: DEFAULT_ABSORPTION_PASS_CAP,
        }
    }
}

impl SegmentationConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke alpha cutoff.
    pub fn with_alpha_cutoff(mut self, cutoff: u8) -> Self {
        self.alpha_cutoff = cutoff;
        self
    }

    /// Set the minimum region area (0 disables filtering).
    pub fn with_min_region_area(mut self, area: usize) -> Self {
        self.min_region_area = area;
        self
    }

    /// Set the absorption pass cap (0 disables absorption).
    pub fn with_absorption_pass_cap(mut self, cap: u32) -> Self {
        self.absorption_pass_cap = cap;
        self
    }
}
