//! Tile index grids.
//!
//! A room is a fixed `MAP_W` x `MAP_H` grid of tile indices stored row-major
//! (`index = y * MAP_W + x`). [`EMPTY`] marks a cell with no tile.

/// Room width in cells.
pub const MAP_W: usize = 16;

/// Room height in cells.
pub const MAP_H: usize = 16;

/// Number of cells in one grid.
pub const CELL_COUNT: usize = MAP_W * MAP_H;

/// A palette index, or [`EMPTY`].
pub type TileIndex = i32;

/// The empty cell sentinel.
pub const EMPTY: TileIndex = -1;

/// Returns true if `value` addresses a tile in a palette of `tile_count` tiles.
pub fn in_palette(value: TileIndex, tile_count: usize) -> bool {
    value >= 0 && (value as usize) < tile_count
}

/// One layer of tile indices. Always holds exactly [`CELL_COUNT`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<TileIndex>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: vec![EMPTY; CELL_COUNT],
        }
    }

    /// Build a grid from row-major cells.
    ///
    /// Returns `None` unless exactly [`CELL_COUNT`] cells are given.
    pub fn from_cells(cells: Vec<TileIndex>) -> Option<Self> {
        (cells.len() == CELL_COUNT).then_some(Self { cells })
    }

    /// Get the value at (x, y), or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<TileIndex> {
        if x >= MAP_W || y >= MAP_H {
            return None;
        }
        Some(self.cells[y * MAP_W + x])
    }

    /// Write a value at (x, y). Returns the previous value.
    ///
    /// Callers check bounds first; an out-of-range write returns `None` and
    /// leaves the grid untouched.
    pub fn set(&mut self, x: usize, y: usize, value: TileIndex) -> Option<TileIndex> {
        if x >= MAP_W || y >= MAP_H {
            return None;
        }
        let cell = &mut self.cells[y * MAP_W + x];
        Some(std::mem::replace(cell, value))
    }

    /// Reset every cell to [`EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Rewrite every cell that does not address a tile in a palette of
    /// `tile_count` tiles to [`EMPTY`]. Returns the number of cells changed.
    pub fn clamp(&mut self, tile_count: usize) -> usize {
        let mut changed = 0;
        for cell in &mut self.cells {
            if *cell != EMPTY && !in_palette(*cell, tile_count) {
                *cell = EMPTY;
                changed += 1;
            }
        }
        changed
    }

    /// Row-major cell slice.
    pub fn cells(&self) -> &[TileIndex] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileIndex]> {
        self.cells.chunks(MAP_W)
    }

    /// Check whether every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Count the non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.cells().len(), CELL_COUNT);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(Grid::from_cells(vec![0; CELL_COUNT]).is_some());
        assert!(Grid::from_cells(vec![0; CELL_COUNT - 1]).is_none());
        assert!(Grid::from_cells(vec![]).is_none());
    }

    #[test]
    fn test_set_row_major() {
        let mut grid = Grid::new();
        assert_eq!(grid.set(3, 2, 7), Some(EMPTY));
        assert_eq!(grid.cells()[2 * MAP_W + 3], 7);
        assert_eq!(grid.get(3, 2), Some(7));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new();
        assert_eq!(grid.get(MAP_W, 0), None);
        assert_eq!(grid.set(0, MAP_H, 1), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clamp() {
        let mut grid = Grid::new();
        grid.set(0, 0, 3);
        grid.set(1, 0, 10);
        grid.set(2, 0, -7);

        assert_eq!(grid.clamp(5), 2);
        assert_eq!(grid.get(0, 0), Some(3));
        assert_eq!(grid.get(1, 0), Some(EMPTY));
        assert_eq!(grid.get(2, 0), Some(EMPTY));

        // Idempotent
        assert_eq!(grid.clamp(5), 0);
    }

    #[test]
    fn test_clamp_zero_clears_all() {
        let mut grid = Grid::from_cells(vec![0; CELL_COUNT]).unwrap();
        assert_eq!(grid.clamp(0), CELL_COUNT);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_rows() {
        let mut grid = Grid::new();
        grid.set(MAP_W - 1, 1, 4);
        let rows: Vec<&[TileIndex]> = grid.rows().collect();
        assert_eq!(rows.len(), MAP_H);
        assert_eq!(rows[1][MAP_W - 1], 4);
    }

    #[test]
    fn test_in_palette() {
        assert!(in_palette(0, 1));
        assert!(!in_palette(1, 1));
        assert!(!in_palette(EMPTY, 10));
        assert!(!in_palette(0, 0));
    }
}
