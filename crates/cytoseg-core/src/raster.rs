//! RasterBuffer - the pixel container consumed by every engine stage
//!
//! A `RasterBuffer` is a width x height grid of pixels with 1 to 4
//! interleaved `u8` channels, stored row-major with the origin at the
//! top-left. It is the decoded form of whatever the host application
//! uploaded; the engine never sees encoded image files.
//!
//! # Channel conventions
//!
//! - 1 channel: grayscale
//! - 2 channels: grayscale + alpha
//! - 3 channels: RGB
//! - 4 channels: RGBA
//!
//! # Ownership model
//!
//! Buffers are owned by the caller. Engine stages read an input buffer and
//! write into a freshly allocated output; no stage mutates its input or
//! aliases another stage's output mid-pass.

use crate::error::{CoreError, CoreResult};

/// Pixel container with 1-4 interleaved u8 channels.
///
/// # Examples
///
/// ```
/// use cytoseg_core::RasterBuffer;
///
/// let raster = RasterBuffer::new(640, 480, 1).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
    channels: u32,
    /// Interleaved sample data, row-major
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Create a new zero-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimension`] if width or height is 0,
    /// [`CoreError::InvalidChannels`] if `channels` is not 1..=4.
    pub fn new(width: u32, height: u32, channels: u32) -> CoreResult<Self> {
        Self::new_filled(width, height, channels, 0)
    }

    /// Create a new buffer with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, channels: u32, value: u8) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        if !(1..=4).contains(&channels) {
            return Err(CoreError::InvalidChannels(channels));
        }

        let size = (width as usize) * (height as usize) * (channels as usize);
        Ok(RasterBuffer {
            width,
            height,
            channels,
            data: vec![value; size],
        })
    }

    /// Wrap an existing sample vector.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BufferLengthMismatch`] if `data.len()` is not
    /// `width * height * channels`, plus the dimension/channel errors of
    /// [`RasterBuffer::new`].
    pub fn from_vec(width: u32, height: u32, channels: u32, data: Vec<u8>) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        if !(1..=4).contains(&channels) {
            return Err(CoreError::InvalidChannels(channels));
        }

        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(CoreError::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(RasterBuffer {
            width,
            height,
            channels,
            data,
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

    /// Get the samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Whether the last channel is an alpha channel (2 or 4 channels).
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }

    /// Borrow the raw interleaved sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw interleaved sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of the first sample of pixel (x, y).
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * (self.channels as usize)
    }

    /// Get one sample. Returns `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32, channel: u32) -> Option<u8> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        Some(self.data[self.pixel_offset(x, y) + channel as usize])
    }

    /// Get one sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of bounds.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, channel: u32) -> u8 {
        self.data[self.pixel_offset(x, y) + channel as usize]
    }

    /// Set one sample.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfBounds`] if the coordinates or
    /// channel are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, channel: u32, value: u8) -> CoreResult<()> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return Err(CoreError::IndexOutOfBounds {
                index: self.pixel_offset(x.min(self.width), y.min(self.height)),
                len: self.data.len(),
            });
        }
        let offset = self.pixel_offset(x, y) + channel as usize;
        self.data[offset] = value;
        Ok(())
    }

    /// Set one sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of bounds.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, channel: u32, value: u8) {
        let offset = self.pixel_offset(x, y) + channel as usize;
        self.data[offset] = value;
    }

    /// Grayscale value of pixel (x, y): the mean of its color channels.
    ///
    /// The alpha channel, when present, does not contribute; a fully
    /// transparent black pixel is still black.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn gray(&self, x: u32, y: u32) -> u8 {
        let offset = self.pixel_offset(x, y);
        let color_channels = if self.has_alpha() {
            self.channels as usize - 1
        } else {
            self.channels as usize
        };

        let mut sum = 0u32;
        for c in 0..color_channels {
            sum += u32::from(self.data[offset + c]);
        }
        (sum / color_channels as u32) as u8
    }

    /// Alpha value of pixel (x, y), if the buffer carries alpha.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if !self.has_alpha() {
            return None;
        }
        Some(self.data[self.pixel_offset(x, y) + self.channels as usize - 1])
    }

    /// 256-bin histogram of grayscale values.
    pub fn gray_histogram(&self) -> [u32; 256] {
        let mut histogram = [0u32; 256];
        for y in 0..self.height {
            for x in 0..self.width {
                histogram[self.gray(x, y) as usize] += 1;
            }
        }
        histogram
    }

    /// Check that every sample in the buffer is exactly 0 or 255.
    ///
    /// This is the precondition gate for binary morphology and the
    /// watershed split; grayscale input makes those operations
    /// meaningless and is rejected by the callers of this check.
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&v| v == 0 || v == 255)
    }

    /// Mean grayscale value of the four corner pixels.
    ///
    /// Used to auto-detect image polarity: bright corners mean the
    /// background-is-white convention, dark corners the opposite.
    pub fn corner_mean(&self) -> f32 {
        let right = self.width - 1;
        let bottom = self.height - 1;
        let sum = u32::from(self.gray(0, 0))
            + u32::from(self.gray(right, 0))
            + u32::from(self.gray(0, bottom))
            + u32::from(self.gray(right, bottom));
        sum as f32 / 4.0
    }
}
