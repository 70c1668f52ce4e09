//! Double-buffered grid storage for the Life simulation

use super::patterns::Pattern;
use itertools::iproduct;
use std::fmt;
use thiserror::Error;

/// Errors reported by grid construction and cell access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("cannot allocate cell buffers for a {width}x{height} grid")]
    Allocation { width: usize, height: usize },
}

/// Result of a change-tracker query for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    /// Whether the cell differs from the previous generation
    pub changed: bool,
    /// The cell's value in the current generation
    pub alive: bool,
}

/// A fixed-size Life grid holding the current and previous generation.
///
/// Cells live in two equally-sized buffers; `current` selects which buffer
/// holds the present generation. Advancing a generation writes into the
/// inactive buffer and flips the index, so the transition always reads a
/// stable snapshot of the prior state. The displaced buffer keeps the
/// previous generation, which is what the change tracker compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    buffers: [Vec<bool>; 2],
    current: usize,
    generation: u64,
}

impl LifeGrid {
    /// Create an all-dead grid with the given dimensions.
    ///
    /// Fails on zero dimensions, on `width * height` overflow, and when a
    /// cell buffer cannot be allocated. No partially-built grid escapes.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }

        let cells = width
            .checked_mul(height)
            .ok_or(GridError::Allocation { width, height })?;

        let mut buffers = [Vec::new(), Vec::new()];
        for buffer in &mut buffers {
            buffer
                .try_reserve_exact(cells)
                .map_err(|_| GridError::Allocation { width, height })?;
            buffer.resize(cells, false);
        }

        Ok(Self {
            width,
            height,
            buffers,
            current: 0,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations advanced since creation or the last `clear`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reset every cell in both buffers to dead and the generation to 0.
    ///
    /// Idempotent; also resets the active buffer to a fixed starting index
    /// so repeated runs from a cleared grid behave identically.
    pub fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(false);
        }
        self.current = 0;
        self.generation = 0;
    }

    /// Validate coordinates and convert them to a buffer offset.
    ///
    /// The single bounds check every cell access goes through.
    fn cell_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Write a cell in the current generation
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.cell_index(x, y)?;
        self.buffers[self.current][idx] = alive;
        Ok(())
    }

    /// Read a cell from the current generation
    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.cell_index(x, y)?;
        Ok(self.buffers[self.current][idx])
    }

    /// Compare a cell against the inactive buffer.
    ///
    /// Immediately after `step` the inactive buffer holds the previous
    /// generation, so this reports exactly the cells a renderer must
    /// repaint. After direct `set_cell` edits the inactive buffer is stale
    /// relative to the edit sequence; drive edit-time repaints from the
    /// edits themselves instead.
    pub fn cell_changed(&self, x: usize, y: usize) -> Result<CellChange, GridError> {
        let idx = self.cell_index(x, y)?;
        let alive = self.buffers[self.current][idx];
        let previous = self.buffers[1 - self.current][idx];
        Ok(CellChange {
            changed: alive != previous,
            alive,
        })
    }

    /// Iterate over all cells that differ from the previous generation,
    /// yielding `(x, y, new_value)` in row-major order.
    pub fn changes(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.width;
        let cur = self.buffers[self.current].as_slice();
        let prev = self.buffers[1 - self.current].as_slice();
        iproduct!(0..self.height, 0..self.width).filter_map(move |(y, x)| {
            let idx = y * width + x;
            (cur[idx] != prev[idx]).then_some((x, y, cur[idx]))
        })
    }

    /// Bulk-write a pattern rectangle into the current generation.
    ///
    /// Writes the pattern's live and dead cells alike, so stamping over
    /// existing live cells clears the rectangle around the pattern's shape.
    /// Cells falling outside the grid are clipped.
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize) {
        for (py, px) in iproduct!(0..pattern.height, 0..pattern.width) {
            let gx = x + px;
            let gy = y + py;
            if gx < self.width && gy < self.height {
                let idx = gy * self.width + gx;
                self.buffers[self.current][idx] = pattern.is_set(px, py);
            }
        }
    }

    /// The current generation's cells as a row-major slice
    pub fn cells(&self) -> &[bool] {
        &self.buffers[self.current]
    }

    /// Coordinates of all living cells in the current generation
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.buffers[self.current][y * self.width + x])
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count living cells in the current generation
    pub fn living_count(&self) -> usize {
        self.buffers[self.current].iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers[self.current].iter().all(|&c| !c)
    }

    /// Borrow the current generation read-only alongside the inactive
    /// buffer mutably, for computing the next generation in place.
    pub(crate) fn snapshot_and_next(&mut self) -> (&[bool], &mut [bool]) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }

    /// Make the freshly-written inactive buffer current and bump the
    /// generation counter. Called once at the end of each step.
    pub(crate) fn promote_next(&mut self) {
        self.current = 1 - self.current;
        self.generation += 1;
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.buffers[self.current][y * self.width + x];
                write!(f, "{}", if alive { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::patterns;

    #[test]
    fn test_grid_creation() {
        let grid = LifeGrid::new(5, 4).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.cells().len(), 20);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            LifeGrid::new(0, 10),
            Err(GridError::ZeroDimension { width: 0, height: 10 })
        );
        assert_eq!(
            LifeGrid::new(10, 0),
            Err(GridError::ZeroDimension { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let result = LifeGrid::new(usize::MAX, 2);
        assert_eq!(
            result,
            Err(GridError::Allocation {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = LifeGrid::new(8, 8).unwrap();
        grid.set_cell(3, 5, true).unwrap();
        assert!(grid.get_cell(3, 5).unwrap());
        grid.set_cell(3, 5, false).unwrap();
        assert!(!grid.get_cell(3, 5).unwrap());
    }

    #[test]
    fn test_out_of_bounds_rejected_uniformly() {
        let mut grid = LifeGrid::new(4, 3).unwrap();
        let expected = GridError::OutOfBounds {
            x: 4,
            y: 0,
            width: 4,
            height: 3,
        };
        assert_eq!(grid.set_cell(4, 0, true), Err(expected));
        assert_eq!(grid.get_cell(4, 0), Err(expected));
        assert_eq!(grid.cell_changed(4, 0), Err(expected));

        assert!(grid.set_cell(0, 3, true).is_err());
        assert!(grid.get_cell(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut grid = LifeGrid::new(6, 6).unwrap();
        grid.set_cell(1, 1, true).unwrap();
        grid.set_cell(2, 1, true).unwrap();
        grid.step();
        assert_eq!(grid.generation(), 1);

        grid.clear();
        assert_eq!(grid.generation(), 0);
        assert!(grid.is_empty());
        for y in 0..6 {
            for x in 0..6 {
                assert!(!grid.get_cell(x, y).unwrap());
                assert!(!grid.cell_changed(x, y).unwrap().changed);
            }
        }
    }

    #[test]
    fn test_set_cell_leaves_generation_untouched() {
        let mut grid = LifeGrid::new(4, 4).unwrap();
        grid.set_cell(0, 0, true).unwrap();
        grid.set_cell(1, 1, true).unwrap();
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_changes_empty_on_fresh_grid() {
        let grid = LifeGrid::new(10, 10).unwrap();
        assert_eq!(grid.changes().count(), 0);
    }

    #[test]
    fn test_cell_changed_compares_against_inactive_buffer() {
        let mut grid = LifeGrid::new(3, 3).unwrap();
        grid.set_cell(1, 1, true).unwrap();

        // The inactive buffer is still all-dead, so the edit is visible as
        // a delta. This is the documented staleness of edit-time queries.
        let change = grid.cell_changed(1, 1).unwrap();
        assert!(change.changed);
        assert!(change.alive);
        assert_eq!(grid.changes().collect::<Vec<_>>(), vec![(1, 1, true)]);
    }

    #[test]
    fn test_living_cells_and_count() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        grid.set_cell(0, 0, true).unwrap();
        grid.set_cell(4, 4, true).unwrap();
        grid.set_cell(2, 3, true).unwrap();
        assert_eq!(grid.living_count(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 0), (2, 3), (4, 4)]);
    }

    #[test]
    fn test_stamp_writes_pattern() {
        let mut grid = LifeGrid::new(10, 10).unwrap();
        let boat = patterns::by_name("Boat").unwrap();
        grid.stamp(boat, 2, 3);

        assert_eq!(grid.living_count(), boat.live_count());
        for py in 0..boat.height {
            for px in 0..boat.width {
                assert_eq!(grid.get_cell(2 + px, 3 + py).unwrap(), boat.is_set(px, py));
            }
        }
    }

    #[test]
    fn test_stamp_overwrites_with_dead_cells() {
        let mut grid = LifeGrid::new(10, 10).unwrap();
        // Fill the target rectangle with live cells first
        for y in 0..4 {
            for x in 0..4 {
                grid.set_cell(x, y, true).unwrap();
            }
        }
        let boat = patterns::by_name("Boat").unwrap();
        grid.stamp(boat, 0, 0);

        // Inside the 3x3 stamp rectangle only the boat's cells survive
        assert!(!grid.get_cell(0, 0).unwrap());
        assert!(grid.get_cell(1, 0).unwrap());
        // Cells outside the rectangle are untouched
        assert!(grid.get_cell(3, 0).unwrap());
        assert!(grid.get_cell(0, 3).unwrap());
    }

    #[test]
    fn test_stamp_clips_at_edges() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        let glider = patterns::by_name("Glider SE").unwrap();
        grid.stamp(glider, 3, 3);

        // Only the 2x2 in-bounds corner of the 3x3 pattern lands
        for py in 0..2 {
            for px in 0..2 {
                assert_eq!(
                    grid.get_cell(3 + px, 3 + py).unwrap(),
                    glider.is_set(px, py)
                );
            }
        }
        // Nothing outside the grid, nothing panics; count matches the
        // clipped sub-rectangle
        let expected = (0..2)
            .flat_map(|py| (0..2).map(move |px| (px, py)))
            .filter(|&(px, py)| glider.is_set(px, py))
            .count();
        assert_eq!(grid.living_count(), expected);
    }

    #[test]
    fn test_display_renders_rows() {
        let mut grid = LifeGrid::new(3, 2).unwrap();
        grid.set_cell(1, 0, true).unwrap();
        assert_eq!(grid.to_string(), "·█·\n···\n");
    }
}
