// patterns.rs - Seed patterns for paint mode

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::{Grid, HEIGHT, WIDTH};

/// A named set of `(row, col)` cells.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(14, 18), (14, 19), (14, 20)],
    },
    Pattern {
        name: "Toad",
        cells: &[(14, 19), (14, 20), (14, 21), (15, 18), (15, 19), (15, 20)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(5, 5), (5, 6), (6, 5), (6, 6), (7, 7), (7, 8), (8, 7), (8, 8)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (8, 16), (8, 17), (8, 18), (8, 22), (8, 23), (8, 24),
            (10, 14), (10, 19), (10, 21), (10, 26),
            (11, 14), (11, 19), (11, 21), (11, 26),
            (12, 14), (12, 19), (12, 21), (12, 26),
            (13, 16), (13, 17), (13, 18), (13, 22), (13, 23), (13, 24),
            // Bottom half (mirrored)
            (15, 16), (15, 17), (15, 18), (15, 22), (15, 23), (15, 24),
            (16, 14), (16, 19), (16, 21), (16, 26),
            (17, 14), (17, 19), (17, 21), (17, 26),
            (18, 14), (18, 19), (18, 21), (18, 26),
            (20, 16), (20, 17), (20, 18), (20, 22), (20, 23), (20, 24),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(14, 19), (14, 20), (13, 20), (15, 19), (15, 18)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the board and stamps `pattern` on it. Cells off the board are dropped.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.reset();
    for &(row, col) in pattern.cells {
        if row < HEIGHT && col < WIDTH {
            grid.set_alive(row, col);
        }
    }
}

/// Clears the board and fills roughly a third of it, deterministically for a given seed.
pub fn apply_random_pattern(grid: &mut Grid, seed_value: u32) {
    grid.reset();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if (seed >> 16) % 3 == 0 {
                grid.set_alive(row, col);
            }
        }
    }
}
