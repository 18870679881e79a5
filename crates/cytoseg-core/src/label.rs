//! LabelGrid - per-pixel region identifiers
//!
//! The label image produced by region labeling and refined by boundary
//! absorption and the watershed flood. Storage is a dense `i32` grid
//! (0 = empty, -1 = contested, positive = region id); the typed
//! [`CellLabel`] view keeps the sentinel encoding out of algorithm code.

use crate::error::{CoreError, CoreResult};

const EMPTY: i32 = 0;
const CONTESTED: i32 = -1;

/// The state of one label cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellLabel {
    /// Unlabeled / background.
    Empty,
    /// Claimed by two floods; a permanent separation pixel. Never
    /// converted back to a region.
    Contested,
    /// Member of region `n` (n >= 1).
    Region(u32),
}

impl CellLabel {
    /// Decode from the dense storage encoding.
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            EMPTY => CellLabel::Empty,
            CONTESTED => CellLabel::Contested,
            n if n > 0 => CellLabel::Region(n as u32),
            // Anything below -1 cannot be produced through the typed API.
            _ => CellLabel::Contested,
        }
    }

    /// Encode into the dense storage encoding.
    #[inline]
    pub fn to_raw(self) -> i32 {
        match self {
            CellLabel::Empty => EMPTY,
            CellLabel::Contested => CONTESTED,
            CellLabel::Region(n) => n as i32,
        }
    }

    /// The region id, if this cell belongs to one.
    #[inline]
    pub fn region(self) -> Option<u32> {
        match self {
            CellLabel::Region(n) => Some(n),
            _ => None,
        }
    }
}

/// Dense signed-integer label image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl LabelGrid {
    /// Create a new all-empty label grid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(LabelGrid {
            width,
            height,
            data: vec![EMPTY; size],
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a cell. Returns `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<CellLabel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(CellLabel::from_raw(self.data[self.index(x, y)]))
    }

    /// Get a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> CellLabel {
        CellLabel::from_raw(self.data[self.index(x, y)])
    }

    /// Set a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, label: CellLabel) {
        let index = self.index(x, y);
        self.data[index] = label.to_raw();
    }

    /// Borrow the raw encoded data.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Highest region id present, 0 when no cell is labeled.
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(EMPTY).max(EMPTY) as u32
    }

    /// Number of cells carrying a positive region label.
    pub fn labeled_count(&self) -> usize {
        self.data.iter().filter(|&&raw| raw > 0).count()
    }

    /// Renumber region ids densely as 1..=N, preserving first-appearance
    /// order in the row-major scan. Returns N.
    ///
    /// Used after minimum-area filtering, which discards regions without
    /// reusing their label values and so can leave gaps in the sequence.
    pub fn compact_labels(&mut self) -> u32 {
        let mut remap: Vec<u32> = vec![0; self.max_label() as usize + 1];
        let mut next = 0u32;

        for raw in self.data.iter_mut() {
            if *raw <= 0 {
                continue;
            }
            let old = *raw as usize;
            if remap[old] == 0 {
                next += 1;
                remap[old] = next;
            }
            *raw = remap[old] as i32;
        }

        next
    }
}
