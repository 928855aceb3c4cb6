// headless.rs - Run the engine without a window and report timings

use std::time::{Duration, Instant};

use log::info;

use life_engine::Simulation;
use life_engine::patterns::apply_random_pattern;

#[derive(Debug)]
pub struct Report {
    pub generations: u64,
    pub population: usize,
    pub elapsed: Duration,
}

impl Report {
    pub fn micros_per_generation(&self) -> u128 {
        match self.generations {
            0 => 0,
            n => self.elapsed.as_micros() / u128::from(n),
        }
    }
}

/// Seeds a random board and advances it `generations` times.
pub fn run(sim: &mut Simulation, generations: u64, seed: u32) -> Report {
    sim.seed_with(|grid| apply_random_pattern(grid, seed));
    info!(
        "Running {} generations with {} strategy from seed {} ({} live cells)",
        generations,
        sim.strategy_kind(),
        seed,
        sim.population()
    );

    let start = Instant::now();
    for _ in 0..generations {
        sim.step();
    }
    let report = Report {
        generations: sim.generation(),
        population: sim.population(),
        elapsed: start.elapsed(),
    };

    info!(
        "Finished: {} live cells after {} generations, {} µs/generation",
        report.population,
        report.generations,
        report.micros_per_generation()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::StrategyKind;

    #[test]
    fn both_strategies_report_the_same_outcome() {
        let mut sequential = Simulation::new(StrategyKind::Sequential).unwrap();
        let mut parallel = Simulation::new(StrategyKind::ParallelRows).unwrap();
        let a = run(&mut sequential, 25, 3);
        let b = run(&mut parallel, 25, 3);
        assert_eq!(a.generations, 25);
        assert_eq!(a.population, b.population);
        assert_eq!(sequential.grid(), parallel.grid());
    }

    #[test]
    fn zero_generations_leaves_the_seed() {
        let mut sim = Simulation::new(StrategyKind::Sequential).unwrap();
        let report = run(&mut sim, 0, 9);
        assert_eq!(report.generations, 0);
        assert_eq!(report.micros_per_generation(), 0);
        assert!(report.population > 0);
    }
}
