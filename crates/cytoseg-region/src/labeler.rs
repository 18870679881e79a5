//! Region labeling - connected components between strokes
//!
//! Scans the grid row-major; every pixel that is neither stroke nor
//! exterior nor already labeled starts an iterative, stack-based
//! 4-connected flood that claims its component under a fresh label.
//! Regions smaller than the configured minimum area are rolled back to
//! empty without reusing their label value; a final compaction renumbers
//! the survivors densely 1..=N.

use crate::context::SegmentationContext;
use cytoseg_core::CellLabel;
use log::{debug, trace};

/// Label every enclosed region in the context.
///
/// `min_area` of 0 disables the noise filter. Returns the number of
/// surviving regions; 0 is the "no regions found" outcome the caller
/// reports to the user.
pub fn label_regions(ctx: &mut SegmentationContext, min_area: usize) -> u32 {
    let width = ctx.width();
    let height = ctx.height();

    let mut stack: Vec<(u32, u32)> = Vec::new();
    let mut cells: Vec<(u32, u32)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if !is_candidate(ctx, x, y) {
                continue;
            }

            let label = ctx.alloc_label();
            cells.clear();

            ctx.labels.set_unchecked(x, y, CellLabel::Region(label));
            stack.push((x, y));
            cells.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                let neighbors = [
                    (cx.wrapping_sub(1), cy),
                    (cx + 1, cy),
                    (cx, cy.wrapping_sub(1)),
                    (cx, cy + 1),
                ];
                for (nx, ny) in neighbors {
                    if nx >= width || ny >= height {
                        continue;
                    }
                    if is_candidate(ctx, nx, ny) {
                        ctx.labels.set_unchecked(nx, ny, CellLabel::Region(label));
                        stack.push((nx, ny));
                        cells.push((nx, ny));
                    }
                }
            }

            if min_area > 0 && cells.len() < min_area {
                // Noise, not a cell. The label value is not reused; the
                // final compaction squeezes the gap out.
                trace!("discarding region {} ({} px < {} px)", label, cells.len(), min_area);
                for &(cx, cy) in &cells {
                    ctx.labels.set_unchecked(cx, cy, CellLabel::Empty);
                }
            }
        }
    }

    let count = ctx.labels.compact_labels();
    debug!("labeled {} regions", count);
    count
}

#[inline]
fn is_candidate(ctx: &SegmentationContext, x: u32, y: u32) -> bool {
    !ctx.strokes.get_unchecked(x, y)
        && !ctx.exterior.get_unchecked(x, y)
        && ctx.labels.get_unchecked(x, y) == CellLabel::Empty
}
