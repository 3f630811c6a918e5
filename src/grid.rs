// The 28x28 drawing grid: the actual data we save, separate from anything visual.
// Visual expectation: every cell set to 1.0 here shows up as a black 10x10
// square once the renderer reads the matrix back.

/// Cells per side of the grid (the output is always 28x28).
pub const GRID_DIM: usize = 28;

/// Device pixels per grid cell.
pub const CELL_SIZE: i32 = 10;

/// Side length of the drawing surface in device pixels (280).
pub const SURFACE_SIZE: i32 = GRID_DIM as i32 * CELL_SIZE;

/// Map a raw pointer coordinate to its (row, col) grid cell.
/// Returns None for anything outside the 280x280 surface, including negative
/// coordinates from dragging past the window edge. Pure function, so the
/// quantization is testable without opening a window.
pub fn cell_at(x: i32, y: i32) -> Option<(usize, usize)> {
    if x < 0 || y < 0 || x >= SURFACE_SIZE || y >= SURFACE_SIZE {
        return None;
    }
    Some(((y / CELL_SIZE) as usize, (x / CELL_SIZE) as usize))
}

/// The pixel intensities we persist: 0.0 = blank, 1.0 = marked, nothing
/// in between (no grayscale, no anti-aliasing).
pub struct GridState {
    cells: [[f32; GRID_DIM]; GRID_DIM],
}

impl GridState {
    /// Start with an all-blank grid.
    pub fn new() -> Self {
        Self { cells: [[0.0; GRID_DIM]; GRID_DIM] }
    }

    /// Mark the cell under the pointer coordinate (x, y).
    /// Out-of-bounds input is silently ignored: dragging off the canvas edge
    /// just stops painting. Marking a marked cell changes nothing, and there
    /// is no way to un-mark a cell.
    pub fn mark(&mut self, x: i32, y: i32) {
        if let Some((row, col)) = cell_at(x, y) {
            self.cells[row][col] = 1.0;
        }
    }

    /// Row-major view of the matrix, for rendering and serialization.
    pub fn rows(&self) -> &[[f32; GRID_DIM]; GRID_DIM] {
        &self.cells
    }

    /// How many cells are currently marked (shown in the HUD).
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&v| v == 1.0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cell_at_quantizes_by_cell_size() {
        assert_eq!(cell_at(0, 0), Some((0, 0)));
        assert_eq!(cell_at(9, 9), Some((0, 0)));
        assert_eq!(cell_at(10, 0), Some((0, 1)));
        assert_eq!(cell_at(0, 10), Some((1, 0)));
        assert_eq!(cell_at(275, 275), Some((27, 27)));
        assert_eq!(cell_at(279, 279), Some((27, 27)));
    }

    #[test]
    fn test_cell_at_rejects_out_of_bounds() {
        assert_eq!(cell_at(-1, 5), None);
        assert_eq!(cell_at(5, -1), None);
        assert_eq!(cell_at(280, 5), None);
        assert_eq!(cell_at(5, 280), None);
        assert_eq!(cell_at(-1, -1), None);
        assert_eq!(cell_at(1000, 1000), None);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut grid = GridState::new();
        grid.mark(42, 137);
        let once = *grid.rows();
        grid.mark(42, 137);
        assert_eq!(*grid.rows(), once);
        assert_eq!(grid.marked_count(), 1);
    }

    #[test]
    fn test_mark_out_of_bounds_is_a_noop() {
        let mut grid = GridState::new();
        grid.mark(-1, 5);
        grid.mark(5, -1);
        grid.mark(280, 140);
        grid.mark(140, 9999);
        assert_eq!(grid.marked_count(), 0);
        assert_eq!(*grid.rows(), [[0.0; GRID_DIM]; GRID_DIM]);
    }

    #[test]
    fn test_mark_corner_scenario() {
        // mark(5,5) lands in the top-left cell, mark(275,275) in the
        // bottom-right cell, and the stray negative coordinate changes nothing.
        let mut grid = GridState::new();
        grid.mark(5, 5);
        grid.mark(275, 275);
        grid.mark(-1, 5);
        assert_eq!(grid.rows()[0][0], 1.0);
        assert_eq!(grid.rows()[27][27], 1.0);
        assert_eq!(grid.marked_count(), 2);
    }

    proptest! {
        #[test]
        fn mark_in_bounds_sets_exactly_that_cell(x in 0i32..SURFACE_SIZE, y in 0i32..SURFACE_SIZE) {
            let mut grid = GridState::new();
            grid.mark(x, y);
            let row = (y / CELL_SIZE) as usize;
            let col = (x / CELL_SIZE) as usize;
            for (r, cells) in grid.rows().iter().enumerate() {
                for (c, &v) in cells.iter().enumerate() {
                    let expected = if (r, c) == (row, col) { 1.0 } else { 0.0 };
                    prop_assert_eq!(v, expected);
                }
            }
        }

        #[test]
        fn mark_out_of_bounds_never_changes_the_grid(x in -1000i32..1000, y in -1000i32..1000) {
            prop_assume!(x < 0 || x >= SURFACE_SIZE || y < 0 || y >= SURFACE_SIZE);
            let mut grid = GridState::new();
            grid.mark(x, y);
            prop_assert_eq!(grid.marked_count(), 0);
        }
    }
}
