// simulation.rs - A grid paired with the strategy that advances it

use log::debug;

use crate::error::EngineError;
use crate::grid::{Grid, TCell};
use crate::strategy::{ComputeStrategy, StrategyKind};

/// The engine as seen by a controller: one board, one strategy, a generation counter.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    strategy: ComputeStrategy,
    generation: u64,
}

impl Simulation {
    pub fn new(kind: StrategyKind) -> Result<Self, EngineError> {
        Ok(Self::with_strategy(ComputeStrategy::new(kind)?))
    }

    pub fn with_strategy(strategy: ComputeStrategy) -> Self {
        Self {
            grid: Grid::new(),
            strategy,
            generation: 0,
        }
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        self.strategy.advance_one_generation(&mut self.grid);
        self.generation += 1;
    }

    /// Kills every cell and restarts the generation count.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.generation = 0;
        debug!("Board reset");
    }

    pub fn get(&self, row: usize, col: usize) -> TCell {
        self.grid.get(row, col)
    }

    pub fn set_alive(&mut self, row: usize, col: usize) {
        self.grid.set_alive(row, col);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Lays down a new starting board with `seed` and restarts the generation count.
    pub fn seed_with(&mut self, seed: impl FnOnce(&mut Grid)) {
        seed(&mut self.grid);
        self.generation = 0;
        debug!("Board seeded, {} live cells", self.grid.population());
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }
}
