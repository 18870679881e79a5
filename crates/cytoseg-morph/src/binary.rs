//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing as 3x3 minimum /
//! maximum filters over strictly binary (0/255) rasters.
//!
//! Every operation starts with a strict binary check and refuses
//! grayscale input with [`MorphError::NotBinary`]; a min/max filter over
//! grayscale data would run happily and produce garbage, so the gate is
//! part of the contract, not a convenience.
//!
//! Border pixels use replicate edge handling: out-of-bounds neighbors
//! clamp to the nearest in-bounds pixel, so the image edge never behaves
//! like a black frame.

use crate::error::{MorphError, MorphResult};
use cytoseg_core::RasterBuffer;

/// Morphological operation selector for [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// 3x3 minimum filter
    Erode,
    /// 3x3 maximum filter
    Dilate,
    /// Erosion followed by dilation; removes speckle foreground
    Open,
    /// Dilation followed by erosion; fills pinholes
    Close,
}

/// Verify that every sample of the raster is 0 or 255.
///
/// # Errors
///
/// Returns [`MorphError::NotBinary`] with the position of the first
/// offending sample.
pub fn check_binary(raster: &RasterBuffer) -> MorphResult<()> {
    let channels = raster.channels() as usize;
    let width = raster.width() as usize;

    for (i, &sample) in raster.data().iter().enumerate() {
        if sample != 0 && sample != 255 {
            let pixel = i / channels;
            return Err(MorphError::NotBinary {
                x: (pixel % width) as u32,
                y: (pixel / width) as u32,
                found: sample,
            });
        }
    }
    Ok(())
}

/// Erode a binary raster (3x3 minimum filter).
///
/// Shrinks foreground regions by one pixel per application.
pub fn erode(raster: &RasterBuffer) -> MorphResult<RasterBuffer> {
    check_binary(raster)?;
    Ok(extremum_3x3(raster, false))
}

/// Dilate a binary raster (3x3 maximum filter).
///
/// Expands foreground regions by one pixel per application.
pub fn dilate(raster: &RasterBuffer) -> MorphResult<RasterBuffer> {
    check_binary(raster)?;
    Ok(extremum_3x3(raster, true))
}

/// Open a binary raster.
///
/// Opening = erosion followed by dilation. Removes foreground objects
/// smaller than the structuring element; never increases the foreground
/// pixel count.
pub fn open(raster: &RasterBuffer) -> MorphResult<RasterBuffer> {
    let eroded = erode(raster)?;
    dilate(&eroded)
}

/// Close a binary raster.
///
/// Closing = dilation followed by erosion. Fills holes smaller than the
/// structuring element; never decreases the foreground pixel count.
pub fn close(raster: &RasterBuffer) -> MorphResult<RasterBuffer> {
    let dilated = dilate(raster)?;
    erode(&dilated)
}

/// Extract the one-pixel outer boundary of foreground objects.
///
/// Computed as (dilate 3x3) XOR original: the background pixels adjacent
/// to each object. Useful for rendering cell outlines over the source
/// image.
pub fn boundary(raster: &RasterBuffer) -> MorphResult<RasterBuffer> {
    let dilated = dilate(raster)?;
    Ok(xor(raster, &dilated))
}

/// Run the selected operation.
pub fn apply(raster: &RasterBuffer, op: MorphOp) -> MorphResult<RasterBuffer> {
    match op {
        MorphOp::Erode => erode(raster),
        MorphOp::Dilate => dilate(raster),
        MorphOp::Open => open(raster),
        MorphOp::Close => close(raster),
    }
}

/// 3x3 min or max filter with replicate edge handling, per channel.
fn extremum_3x3(raster: &RasterBuffer, take_max: bool) -> RasterBuffer {
    let width = raster.width();
    let height = raster.height();
    let channels = raster.channels();

    let mut out = RasterBuffer::new(width, height, channels).expect("input dimensions are valid");

    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut extremum = if take_max { 0u8 } else { 255u8 };
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        let nx = (x as i32 + dx).clamp(0, width as i32 - 1) as u32;
                        let ny = (y as i32 + dy).clamp(0, height as i32 - 1) as u32;
                        let sample = raster.get_unchecked(nx, ny, c);
                        extremum = if take_max {
                            extremum.max(sample)
                        } else {
                            extremum.min(sample)
                        };
                    }
                }
                out.set_unchecked(x, y, c, extremum);
            }
        }
    }

    out
}

/// Sample-wise XOR of two equally-shaped binary rasters.
fn xor(a: &RasterBuffer, b: &RasterBuffer) -> RasterBuffer {
    let data = a
        .data()
        .iter()
        .zip(b.data().iter())
        .map(|(&va, &vb)| if va != vb { 255 } else { 0 })
        .collect();
    RasterBuffer::from_vec(a.width(), a.height(), a.channels(), data)
        .expect("inputs share dimensions")
}
