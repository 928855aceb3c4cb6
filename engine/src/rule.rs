// rule.rs - Conway's B3/S23 transition rule

use crate::grid::{HEIGHT, TCell, WIDTH};

/// Next state of a cell given its own state and how many of its neighbors are alive.
pub fn next_state(alive: TCell, live_neighbors: u8) -> TCell {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Counts the alive cells among the up-to-8 neighbors of `(row, col)`.
///
/// Neighbors that would fall off the board are skipped, not wrapped.
pub fn live_neighbors(current: &[TCell], row: usize, col: usize) -> u8 {
    debug_assert_eq!(current.len(), WIDTH * HEIGHT);
    let rows = row.saturating_sub(1)..=(row + 1).min(HEIGHT - 1);
    let mut count = 0;
    for r in rows {
        let cols = col.saturating_sub(1)..=(col + 1).min(WIDTH - 1);
        for c in cols {
            if (r, c) != (row, col) && current[r * WIDTH + c] {
                count += 1;
            }
        }
    }
    count
}

/// Evaluates every cell of `row` from the frozen `current` board into `out`.
///
/// `out` is exactly one row wide. Columns are visited left to right.
pub fn compute_row(current: &[TCell], row: usize, out: &mut [TCell]) {
    debug_assert_eq!(out.len(), WIDTH);
    for (col, cell) in out.iter_mut().enumerate() {
        let alive = current[row * WIDTH + col];
        *cell = next_state(alive, live_neighbors(current, row, col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CELL_COUNT;

    fn board_with(cells: &[(usize, usize)]) -> Vec<TCell> {
        let mut board = vec![false; CELL_COUNT];
        for &(r, c) in cells {
            board[r * WIDTH + c] = true;
        }
        board
    }

    #[test]
    fn birth_needs_exactly_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead cell with {n} neighbors");
        }
    }

    #[test]
    fn survival_on_two_or_three() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live cell with {n} neighbors");
        }
    }

    #[test]
    fn corner_counts_only_on_board_neighbors() {
        let board = board_with(&[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(live_neighbors(&board, 0, 0), 3);

        let far = board_with(&[(HEIGHT - 1, WIDTH - 2), (HEIGHT - 2, WIDTH - 1)]);
        assert_eq!(live_neighbors(&far, HEIGHT - 1, WIDTH - 1), 2);
    }

    #[test]
    fn no_wraparound_across_edges() {
        // Alive cells on the opposite edges would be neighbors on a torus.
        let board = board_with(&[(0, WIDTH - 1), (HEIGHT - 1, 0), (HEIGHT - 1, WIDTH - 1)]);
        assert_eq!(live_neighbors(&board, 0, 0), 0);
    }

    #[test]
    fn self_is_not_a_neighbor() {
        let board = board_with(&[(5, 5)]);
        assert_eq!(live_neighbors(&board, 5, 5), 0);
        assert_eq!(live_neighbors(&board, 5, 6), 1);
    }

    #[test]
    fn full_neighborhood_counts_eight() {
        let cells: Vec<_> = (4..=6).flat_map(|r| (4..=6).map(move |c| (r, c))).collect();
        let board = board_with(&cells);
        assert_eq!(live_neighbors(&board, 5, 5), 8);
    }

    #[test]
    fn compute_row_applies_rule_per_column() {
        // Horizontal blinker on row 10: row 9 gets a birth at column 20.
        let board = board_with(&[(10, 19), (10, 20), (10, 21)]);
        let mut out = [false; WIDTH];
        compute_row(&board, 9, &mut out);
        let alive: Vec<_> = (0..WIDTH).filter(|&c| out[c]).collect();
        assert_eq!(alive, vec![20]);

        compute_row(&board, 10, &mut out);
        let alive: Vec<_> = (0..WIDTH).filter(|&c| out[c]).collect();
        assert_eq!(alive, vec![20]);
    }
}
