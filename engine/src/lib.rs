//! Bounded 40x30 Game of Life engine with interchangeable sequential and
//! row-parallel generation updates.

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod simulation;
pub mod strategy;

pub use error::EngineError;
pub use grid::{Grid, HEIGHT, TCell, WIDTH};
pub use simulation::Simulation;
pub use strategy::{ComputeStrategy, ParallelRows, StrategyKind};
