// strategy.rs - Sequential and row-parallel generation updates

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info, trace};

use crate::error::EngineError;
use crate::grid::{Grid, HEIGHT, TCell, WIDTH};
use crate::rule::compute_row;

/// Which compute strategy to run, as chosen on the command line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    #[default]
    Sequential,
    ParallelRows,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Sequential, StrategyKind::ParallelRows];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::ParallelRows => "parallel-rows",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::UnknownStrategy(s.to_owned()))
    }
}

/// Advances a [`Grid`] by one generation. Chosen once at startup.
#[derive(Debug)]
pub enum ComputeStrategy {
    Sequential,
    ParallelRows(ParallelRows),
}

impl ComputeStrategy {
    pub fn new(kind: StrategyKind) -> Result<Self, EngineError> {
        let strategy = match kind {
            StrategyKind::Sequential => ComputeStrategy::Sequential,
            StrategyKind::ParallelRows => ComputeStrategy::ParallelRows(ParallelRows::new()?),
        };
        match &strategy {
            ComputeStrategy::Sequential => info!("Using single core"),
            ComputeStrategy::ParallelRows(p) => {
                info!("Using row-parallel update with {} workers", p.workers())
            }
        }
        Ok(strategy)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            ComputeStrategy::Sequential => StrategyKind::Sequential,
            ComputeStrategy::ParallelRows(_) => StrategyKind::ParallelRows,
        }
    }

    /// Replaces the grid's current generation with the next one.
    ///
    /// Blocks until the whole generation is committed. Both variants produce
    /// identical grids for identical input.
    ///
    /// # Panics
    ///
    /// `ParallelRows` blocks on its own runtime, so it panics if called from
    /// inside an async context (any tokio runtime). Call it from a plain
    /// thread, or wrap it in `tokio::task::spawn_blocking`.
    pub fn advance_one_generation(&self, grid: &mut Grid) {
        match self {
            ComputeStrategy::Sequential => advance_sequential(grid),
            ComputeStrategy::ParallelRows(parallel) => parallel.advance(grid),
        }
    }
}

fn advance_sequential(grid: &mut Grid) {
    let (current, next) = grid.split_mut();
    for (row, out) in next.chunks_exact_mut(WIDTH).enumerate() {
        compute_row(current, row, out);
    }
    grid.commit_next_as_current();
}

/// Splits `0..height` into `workers` contiguous bands whose sizes differ by at most one.
///
/// Never returns an empty band; asking for more workers than rows yields one band per row.
pub fn row_partition(height: usize, workers: usize) -> Vec<Range<usize>> {
    let bands = workers.clamp(1, height.max(1)).min(height);
    let mut ranges = Vec::with_capacity(bands);
    if bands == 0 {
        return ranges;
    }
    let (base, extra) = (height / bands, height % bands);
    let mut start = 0;
    for band in 0..bands {
        let len = base + usize::from(band < extra);
        ranges.push(start..start + len);
        start += len;
    }
    debug_assert_eq!(start, height);
    ranges
}

/// Row band worker: computes the next state of `rows` from a frozen snapshot.
fn process_band(current: &[TCell], rows: Range<usize>) -> (Range<usize>, Vec<TCell>) {
    let mut band = vec![false; rows.len() * WIDTH];
    for (row, out) in rows.clone().zip(band.chunks_exact_mut(WIDTH)) {
        compute_row(current, row, out);
    }
    (rows, band)
}

/// Fork-join update that gives each worker task its own contiguous band of rows.
#[derive(Debug)]
pub struct ParallelRows {
    runtime: tokio::runtime::Runtime,
    workers: usize,
}

impl ParallelRows {
    /// One worker per available processing unit.
    pub fn new() -> Result<Self, EngineError> {
        let workers = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self::with_workers(workers)
    }

    pub fn with_workers(workers: usize) -> Result<Self, EngineError> {
        let workers = workers.clamp(1, HEIGHT);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name("life-row-worker")
            .build()?;
        debug!("Started {} row workers", workers);
        Ok(Self { runtime, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs one generation across the row bands.
    ///
    /// Spawned tasks must be `'static`, so they cannot borrow the grid. Each
    /// pass therefore copies `current` into a shared read-only snapshot, and
    /// each worker fills a band buffer it owns. Once every task has been
    /// joined, the calling thread copies each band into its rows of `next`
    /// and commits. Bands are disjoint, so no row of `next` is written twice.
    fn advance(&self, grid: &mut Grid) {
        // Workers only read this snapshot; the grid itself is not shared.
        let frozen: Arc<[TCell]> = Arc::from(&grid.current()[..]);
        let bands = row_partition(HEIGHT, self.workers);
        trace!("Advancing generation over {} bands", bands.len());

        self.runtime.block_on(async {
            let handles: Vec<_> = bands
                .into_iter()
                .map(|rows| {
                    let frozen = Arc::clone(&frozen);
                    tokio::spawn(async move { process_band(&frozen, rows) })
                })
                .collect();

            // Barrier: every band is written before anything is committed.
            for handle in handles {
                match handle.await {
                    Ok((rows, band)) => grid.next_rows_mut(rows).copy_from_slice(&band),
                    Err(err) => std::panic::resume_unwind(err.into_panic()),
                }
            }
        });

        grid.commit_next_as_current();
    }
}
