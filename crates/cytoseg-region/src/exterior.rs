//! Exterior fill - finding the outside background component
//!
//! Multi-source BFS seeded from every border pixel that is not a stroke,
//! expanding through 4-connected non-stroke pixels. The visited grid is
//! the single exterior component: any pixel reachable from the border
//! without crossing a stroke. Everything else (stroke pixels and fully
//! enclosed interior) stays unvisited and is a labeling candidate.

use cytoseg_core::BinaryGrid;
use log::trace;
use std::collections::VecDeque;

/// Flood the exterior of an (extended) stroke mask.
///
/// Stroke pixels are never visited. The flood is iterative; stack depth
/// does not scale with image size.
pub fn fill_exterior(strokes: &BinaryGrid) -> BinaryGrid {
    let width = strokes.width();
    let height = strokes.height();

    let mut visited = BinaryGrid::new(width, height).expect("stroke grid dimensions are valid");
    let mut queue = VecDeque::new();

    let try_seed = |x: u32, y: u32, visited: &mut BinaryGrid, queue: &mut VecDeque<(u32, u32)>| {
        if !strokes.get_unchecked(x, y) && !visited.get_unchecked(x, y) {
            visited.set_unchecked(x, y, true);
            queue.push_back((x, y));
        }
    };

    for x in 0..width {
        try_seed(x, 0, &mut visited, &mut queue);
        try_seed(x, height - 1, &mut visited, &mut queue);
    }
    for y in 0..height {
        try_seed(0, y, &mut visited, &mut queue);
        try_seed(width - 1, y, &mut visited, &mut queue);
    }

    while let Some((x, y)) = queue.pop_front() {
        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if nx >= width || ny >= height {
                continue;
            }
            if !strokes.get_unchecked(nx, ny) && !visited.get_unchecked(nx, ny) {
                visited.set_unchecked(nx, ny, true);
                queue.push_back((nx, ny));
            }
        }
    }

    trace!("exterior fill visited {} pixels", visited.count());
    visited
}
