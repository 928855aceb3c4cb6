// main.rs - Conway's Game of Life on a 40x30 board

use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use eframe::egui;
use log::info;

use life_engine::{HEIGHT, Simulation, StrategyKind, WIDTH};

mod headless;
mod ui;

use ui::LifeApp;

#[derive(Debug, Parser)]
#[command(name = "life", version, about = "Conway's Game of Life on a fixed 40x30 board")]
struct Args {
    /// How each generation is computed
    #[arg(long, value_enum, default_value_t = Strategy::Sequential)]
    strategy: Strategy,

    /// Delay between generations while running
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Run this many generations without a window, then exit
    #[arg(long, value_name = "GENERATIONS")]
    headless: Option<u64>,

    /// Seed for random boards
    #[arg(long, default_value_t = 1)]
    seed: u32,
}

/// Command-line names for the engine's compute strategies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// One row after another on the calling thread
    Sequential,
    /// Row bands spread over one worker per core
    ParallelRows,
}

impl From<Strategy> for StrategyKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Sequential => StrategyKind::Sequential,
            Strategy::ParallelRows => StrategyKind::ParallelRows,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("Starting life v{} ...", env!("CARGO_PKG_VERSION"));

    let mut sim = Simulation::new(args.strategy.into()).context("could not set up the simulation")?;

    if let Some(generations) = args.headless {
        headless::run(&mut sim, generations, args.seed);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WIDTH as f32 * 19.0 + 40.0, HEIGHT as f32 * 19.0 + 220.0]),
        ..Default::default()
    };
    let app = LifeApp::new(sim, Duration::from_millis(args.interval_ms), args.seed);

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_to_sequential() {
        let args = Args::try_parse_from(["life"]).unwrap();
        assert_eq!(StrategyKind::from(args.strategy), StrategyKind::Sequential);
        assert_eq!(args.interval_ms, 100);
        assert!(args.headless.is_none());
    }

    #[test]
    fn accepts_parallel_rows() {
        let args = Args::try_parse_from(["life", "--strategy", "parallel-rows", "--headless", "10"]).unwrap();
        assert_eq!(StrategyKind::from(args.strategy), StrategyKind::ParallelRows);
        assert_eq!(args.headless, Some(10));
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Args::try_parse_from(["life", "--strategy", "openmp"]).is_err());
    }

    #[test]
    fn command_line_names_match_engine_names() {
        for strategy in Strategy::value_variants() {
            let value = strategy.to_possible_value().unwrap();
            assert_eq!(value.get_name(), StrategyKind::from(*strategy).name());
            assert_eq!(value.get_name().parse::<StrategyKind>().unwrap(), StrategyKind::from(*strategy));
        }
    }

    #[test]
    fn help_lists_accepted_strategies() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("sequential"), "{help}");
        assert!(help.contains("parallel-rows"), "{help}");
    }
}
