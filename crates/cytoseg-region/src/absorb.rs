//! Boundary absorption - resolving stroke pixels into their regions
//!
//! After labeling, the stroke pixels themselves carry no label. Each
//! absorption pass stages every still-unlabeled stroke pixel whose
//! 8-neighborhood agrees on exactly one positive label, then applies the
//! staged assignments after the scan; staging and applying never mix
//! within a pass, so the result does not depend on scan order.
//!
//! This is a fixed-point iteration, not a one-shot classification: a
//! thin stroke is absorbed one ring at a time from both sides, so a
//! pixel ambiguous in one pass can become resolvable in a later one.
//! Pixels still ambiguous (or still without labeled neighbors) when the
//! pass cap is reached remain boundary/background in the final output.

use crate::context::SegmentationContext;
use cytoseg_core::CellLabel;
use log::debug;

/// Absorb stroke pixels into adjacent regions.
///
/// Runs at most `pass_cap` passes, stopping early when a pass stages
/// nothing. Returns the number of passes executed.
pub fn absorb_boundaries(ctx: &mut SegmentationContext, pass_cap: u32) -> u32 {
    let width = ctx.width();
    let height = ctx.height();

    let mut staged: Vec<(u32, u32, u32)> = Vec::new();
    let mut passes = 0;

    for _ in 0..pass_cap {
        staged.clear();

        for y in 0..height {
            for x in 0..width {
                if !ctx.strokes.get_unchecked(x, y)
                    || ctx.labels.get_unchecked(x, y) != CellLabel::Empty
                {
                    continue;
                }
                if let Some(label) = sole_neighbor_label(ctx, x, y) {
                    staged.push((x, y, label));
                }
            }
        }

        if staged.is_empty() {
            break;
        }
        for &(x, y, label) in &staged {
            ctx.labels.set_unchecked(x, y, CellLabel::Region(label));
        }
        passes += 1;
    }

    debug!("absorption converged after {} passes", passes);
    passes
}

/// The single positive label among the 8 neighbors of (x, y), or `None`
/// when the neighbors carry zero or two-plus distinct labels.
fn sole_neighbor_label(ctx: &SegmentationContext, x: u32, y: u32) -> Option<u32> {
    let width = ctx.width();
    let height = ctx.height();

    let mut found: Option<u32> = None;
    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                continue;
            }
            if let CellLabel::Region(label) = ctx.labels.get_unchecked(nx as u32, ny as u32) {
                match found {
                    None => found = Some(label),
                    Some(existing) if existing != label => return None,
                    Some(_) => {}
                }
            }
        }
    }
    found
}
