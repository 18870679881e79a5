//! BinaryGrid - one boolean per pixel
//!
//! Derived from a [`RasterBuffer`] by a threshold predicate and consumed
//! by the flood-fill and morphology stages. Stored row-major with no
//! padding; the cell at (x, y) is at index `y * width + x`.

use crate::error::{CoreError, CoreResult};
use crate::raster::RasterBuffer;

/// Boolean pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BinaryGrid {
    /// Create a new all-false grid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(BinaryGrid {
            width,
            height,
            data: vec![false; size],
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
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y)]
    }

    /// Set a cell.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfBounds`] if the coordinates are out
    /// of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: bool) -> CoreResult<()> {
        if x >= self.width || y >= self.height {
            return Err(CoreError::IndexOutOfBounds {
                index: self.index(x.min(self.width), y.min(self.height)),
                len: self.data.len(),
            });
        }
        let index = self.index(x, y);
        self.data[index] = value;
        Ok(())
    }

    /// Set a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: bool) {
        let index = self.index(x, y);
        self.data[index] = value;
    }

    /// Number of set cells. Zero means "nothing detected" and is a valid,
    /// caller-detectable outcome rather than an error.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Convert to a 1-channel raster, set cells as `fg`, clear cells as `bg`.
    pub fn to_raster(&self, fg: u8, bg: u8) -> RasterBuffer {
        let data = self.data.iter().map(|&v| if v { fg } else { bg }).collect();
        // Dimensions were validated at construction.
        RasterBuffer::from_vec(self.width, self.height, 1, data)
            .expect("grid dimensions are valid")
    }
}
