// grid.rs - Double-buffered board for Conway's Game of Life

use std::fmt;
use std::ops::Range;

// Compile-time board size
pub const WIDTH: usize = 40;
pub const HEIGHT: usize = 30;
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// One cell: `true` is alive, `false` is dead.
pub type TCell = bool;
/// Flat row-major board: cell `(row, col)` lives at `row * WIDTH + col`.
pub type TBoard = [TCell; CELL_COUNT];

const EMPTY: TBoard = [false; CELL_COUNT];

#[inline]
pub(crate) fn index(row: usize, col: usize) -> usize {
    assert!(
        row < HEIGHT && col < WIDTH,
        "cell ({row}, {col}) is outside the {WIDTH}x{HEIGHT} board"
    );
    row * WIDTH + col
}

/// The current generation plus a scratch buffer the next one is computed into.
///
/// Only `current` is ever observable through the public API. `next` holds
/// a complete generation only between the end of a compute pass and
/// [`Grid::commit_next_as_current`].
#[derive(Clone)]
pub struct Grid {
    current: TBoard,
    next: TBoard,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            current: EMPTY,
            next: EMPTY,
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a cell of the current generation.
    ///
    /// Panics if `(row, col)` is off the board.
    pub fn get(&self, row: usize, col: usize) -> TCell {
        self.current[index(row, col)]
    }

    /// Paint-mode write. Must not be called while a generation is being advanced.
    pub fn set_alive(&mut self, row: usize, col: usize) {
        self.current[index(row, col)] = true;
    }

    /// Kills every cell in both buffers.
    pub fn reset(&mut self) {
        self.current = EMPTY;
        self.next = EMPTY;
    }

    /// Replaces the current generation with the next one, row-major.
    ///
    /// Callers must have written every cell of `next` for this generation.
    pub fn commit_next_as_current(&mut self) {
        for (row, next_row) in self.next.chunks_exact(WIDTH).enumerate() {
            self.current[row * WIDTH..(row + 1) * WIDTH].copy_from_slice(next_row);
        }
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    pub fn current(&self) -> &TBoard {
        &self.current
    }

    pub fn row(&self, row: usize) -> &[TCell] {
        let start = index(row, 0);
        &self.current[start..start + WIDTH]
    }

    /// Mutable view of `rows` in the next buffer, for a strategy's write phase.
    pub(crate) fn next_rows_mut(&mut self, rows: Range<usize>) -> &mut [TCell] {
        assert!(rows.start <= rows.end && rows.end <= HEIGHT, "row range {rows:?} out of bounds");
        &mut self.next[rows.start * WIDTH..rows.end * WIDTH]
    }

    /// Splits the grid into the read-only current buffer and the writable next buffer.
    pub(crate) fn split_mut(&mut self) -> (&TBoard, &mut TBoard) {
        (&self.current, &mut self.next)
    }
}

// Two grids are equal when their observable generations are.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.current.chunks_exact(WIDTH) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("population", &self.population())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_dead() {
        let grid = Grid::new();
        assert_eq!(grid.population(), 0);
        assert!(!grid.get(0, 0));
        assert!(!grid.get(HEIGHT - 1, WIDTH - 1));
    }

    #[test]
    fn row_major_addressing() {
        let mut grid = Grid::new();
        grid.set_alive(2, 5);
        assert!(grid.get(2, 5));
        assert!(!grid.get(5, 2));
        assert!(grid.current()[2 * WIDTH + 5]);
        assert_eq!(grid.row(2).iter().filter(|&&c| c).count(), 1);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn reset_clears_both_buffers_and_is_idempotent() {
        let mut grid = Grid::new();
        grid.set_alive(0, 0);
        grid.set_alive(HEIGHT - 1, WIDTH - 1);
        grid.next_rows_mut(0..1)[3] = true;

        grid.reset();
        let once = grid.clone();
        grid.reset();
        assert_eq!(grid, once);
        assert_eq!(grid, Grid::new());

        // A stale next buffer would resurface on commit.
        grid.commit_next_as_current();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn commit_copies_next_over_current() {
        let mut grid = Grid::new();
        grid.set_alive(1, 1);
        grid.next_rows_mut(4..5)[7] = true;
        grid.commit_next_as_current();
        assert!(grid.get(4, 7));
        assert!(!grid.get(1, 1));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn column_out_of_range_panics() {
        Grid::new().get(0, WIDTH);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn row_out_of_range_panics() {
        Grid::new().set_alive(HEIGHT, 0);
    }

    #[test]
    fn display_draws_alive_cells() {
        let mut grid = Grid::new();
        grid.set_alive(0, 1);
        let text = grid.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first.len(), WIDTH);
        assert!(first.starts_with(".#."));
        assert_eq!(text.lines().count(), HEIGHT);
    }
}
