use thiserror::Error;

/// Startup failures. Once a simulation is running nothing in the engine fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown compute strategy {0:?} (expected `sequential` or `parallel-rows`)")]
    UnknownStrategy(String),
    #[error("failed to start row worker runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
