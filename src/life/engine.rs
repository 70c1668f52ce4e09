//! Generation transition for the Life grid

use super::grid::{GridError, LifeGrid};
use rayon::prelude::*;

/// Conway's rule for a single cell.
///
/// Two neighbors keep the cell as it is, three make it alive regardless of
/// its current state, anything else kills it.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) | (false, 3) => true,
        _ => false,
    }
}

/// Count live cells in the up-to-8 surrounding positions.
///
/// The window is clamped at the grid borders; the world does not wrap, so
/// edge cells see fewer than eight neighbors.
fn live_neighbors(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let x0 = x.saturating_sub(1);
    let x1 = (x + 1).min(width - 1);
    let y0 = y.saturating_sub(1);
    let y1 = (y + 1).min(height - 1);

    let mut count = 0;
    for ny in y0..=y1 {
        for nx in x0..=x1 {
            if (nx != x || ny != y) && cells[ny * width + nx] {
                count += 1;
            }
        }
    }
    count
}

impl LifeGrid {
    /// Advance the grid by exactly one generation.
    ///
    /// Every cell of the next generation is computed from the stable
    /// snapshot held by the current buffer and written into the inactive
    /// one; only once the whole grid is done does the inactive buffer
    /// become current and the generation counter advance. Rows are
    /// computed in parallel. Cannot fail.
    pub fn step(&mut self) {
        let width = self.width();
        let height = self.height();
        let (snapshot, next) = self.snapshot_and_next();

        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let neighbors = live_neighbors(snapshot, width, height, x, y);
                    *cell = next_state(snapshot[y * width + x], neighbors);
                }
            });

        self.promote_next();
    }

    /// Live-neighbor count for one cell of the current generation
    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        // Reuse the access path's bounds check before touching the buffer
        self.get_cell(x, y)?;
        Ok(live_neighbors(
            self.cells(),
            self.width(),
            self.height(),
            x,
            y,
        ))
    }
}
