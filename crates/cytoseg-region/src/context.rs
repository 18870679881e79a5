//! Segmentation working state
//!
//! [`SegmentationContext`] is the arena threaded by mutable borrow
//! through the labeling and absorption stages: the stroke grid, the
//! exterior grid, the label image under construction and the label
//! counter. There is no module-level state anywhere in the engine; two
//! segmentations never share anything.

use crate::error::{SegmentError, SegmentResult};
use cytoseg_core::{BinaryGrid, CoreError, LabelGrid};

/// Working state for one stroke-segmentation run.
#[derive(Debug)]
pub struct SegmentationContext {
    /// Original stroke mask (closure pixels excluded).
    pub(crate) strokes: BinaryGrid,
    /// Exterior/background mask from the border flood.
    pub(crate) exterior: BinaryGrid,
    /// Label image under construction.
    pub(crate) labels: LabelGrid,
    /// Next label to hand out; never decremented, so discarded labels
    /// are not reused within a run.
    next_label: u32,
}

impl SegmentationContext {
    /// Create a context over a stroke mask and its exterior mask.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] (wrapped) if the two
    /// grids disagree on dimensions.
    pub fn new(strokes: BinaryGrid, exterior: BinaryGrid) -> SegmentResult<Self> {
        if strokes.width() != exterior.width() || strokes.height() != exterior.height() {
            return Err(SegmentError::Core(CoreError::DimensionMismatch {
                expected: (strokes.width(), strokes.height()),
                actual: (exterior.width(), exterior.height()),
            }));
        }

        let labels = LabelGrid::new(strokes.width(), strokes.height())?;
        Ok(Self {
            strokes,
            exterior,
            labels,
            next_label: 0,
        })
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.strokes.width()
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.strokes.height()
    }

    /// The original stroke mask.
    pub fn strokes(&self) -> &BinaryGrid {
        &self.strokes
    }

    /// The exterior mask.
    pub fn exterior(&self) -> &BinaryGrid {
        &self.exterior
    }

    /// The label image in its current state.
    pub fn labels(&self) -> &LabelGrid {
        &self.labels
    }

    /// Hand out a fresh label.
    pub(crate) fn alloc_label(&mut self) -> u32 {
        self.next_label += 1;
        self.next_label
    }

    /// Consume the context, keeping only the finished label image.
    pub fn into_labels(self) -> LabelGrid {
        self.labels
    }
}
