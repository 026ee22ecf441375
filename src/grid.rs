//! Grid model and generation module.
//!
//! This module contains the `Cell` and `Grid` types along with the single-pass random generation
//! that produces a fresh maze on every reset.

use rand::{rngs::StdRng, Rng as _};

/// Number of columns in the grid.
pub(crate) const COLS: usize = 18;

/// Number of rows in the grid.
pub(crate) const ROWS: usize = 14;

/// Probability that an interior cell is generated as a wall.
///
/// This constant biases the coin flip performed for every non-border cell during generation.
/// Border cells are unconditionally walls and never flip a coin.
pub(crate) const WALL_PROBABILITY: f64 = 0.18;

/// Kind of a single grid cell.
///
/// This enumeration distinguishes the two kinds of tile the maze is made of. Walls block
/// movement unless the no-walls glitch is active; floors are traversable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Impassable tile.
    Wall,
    /// Traversable tile.
    Floor,
}

/// Fixed-size maze grid.
///
/// This structure stores the [`COLS`] x [`ROWS`] cells of the maze in a row-major vector. A grid
/// is immutable once generated; resetting the game replaces it wholesale with a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Row-major cell storage.
    ///
    /// This field holds every cell of the grid, with the cell at `(col, row)` stored at index
    /// `row * COLS + col`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Generates a fresh grid from the given random source.
    ///
    /// This function performs a single pass over all cells: border cells are always walls, while
    /// every interior cell becomes a wall with [`WALL_PROBABILITY`] and a floor otherwise.
    /// Generation always succeeds.
    pub(crate) fn generate(rng: &mut StdRng) -> Self {
        let mut cells = Vec::with_capacity(COLS * ROWS);

        for row in 0..ROWS {
            for col in 0..COLS {
                let border = row == 0 || row == ROWS - 1 || col == 0 || col == COLS - 1;
                let cell = if border || rng.gen_bool(WALL_PROBABILITY) {
                    Cell::Wall
                } else {
                    Cell::Floor
                };

                cells.push(cell);
            }
        }

        Self { cells }
    }

    /// Returns the cell at the given column and row, or `None` when out of bounds.
    pub(crate) fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < COLS && row < ROWS {
            self.cells.get(row * COLS + col).copied()
        } else {
            None
        }
    }

    /// Returns whether the given position is an in-bounds floor cell.
    pub(crate) fn is_floor(&self, col: usize, row: usize) -> bool {
        self.cell(col, row) == Some(Cell::Floor)
    }

    /// Builds a grid whose interior is entirely floor, for tests.
    #[cfg(test)]
    pub(crate) fn open() -> Self {
        let mut cells = Vec::with_capacity(COLS * ROWS);

        for row in 0..ROWS {
            for col in 0..COLS {
                let border = row == 0 || row == ROWS - 1 || col == 0 || col == COLS - 1;
                cells.push(if border { Cell::Wall } else { Cell::Floor });
            }
        }

        Self { cells }
    }

    /// Overwrites a single cell, for tests that need a known layout.
    #[cfg(test)]
    pub(crate) fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row * COLS + col) {
            *slot = cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn test_border_cells_are_walls_for_many_seeds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::generate(&mut rng);

            for col in 0..COLS {
                assert_eq!(grid.cell(col, 0), Some(Cell::Wall), "top border, seed {seed}");
                assert_eq!(
                    grid.cell(col, ROWS - 1),
                    Some(Cell::Wall),
                    "bottom border, seed {seed}"
                );
            }
            for row in 0..ROWS {
                assert_eq!(grid.cell(0, row), Some(Cell::Wall), "left border, seed {seed}");
                assert_eq!(
                    grid.cell(COLS - 1, row),
                    Some(Cell::Wall),
                    "right border, seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_same_seed_produces_same_grid() {
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        assert_eq!(Grid::generate(&mut first_rng), Grid::generate(&mut second_rng));
    }

    #[test]
    fn test_different_seeds_produce_different_grids() {
        let mut first_rng = StdRng::seed_from_u64(1);
        let mut second_rng = StdRng::seed_from_u64(2);

        assert_ne!(Grid::generate(&mut first_rng), Grid::generate(&mut second_rng));
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = Grid::generate(&mut rng);

        assert_eq!(grid.cell(COLS, 0), None);
        assert_eq!(grid.cell(0, ROWS), None);
        assert_eq!(grid.cell(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_open_grid_interior_is_floor() {
        let grid = Grid::open();

        for row in 1..ROWS - 1 {
            for col in 1..COLS - 1 {
                assert!(grid.is_floor(col, row), "interior cell ({col}, {row})");
            }
        }
        assert!(!grid.is_floor(0, 0), "corner must remain a wall");
    }
}
