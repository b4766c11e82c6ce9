//! Crucible: route a cart across a heat-loss grid under run-length limits.
//!
//! Reads a grid of digits (one row per line) and prints the minimum heat
//! loss from the top-left to the bottom-right cell, one line per
//! configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crucible_core::CostGrid;
use crucible_paths::{Execution, RunLimits, SearchError, min_costs};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid file: one row per line, one digit per cell.
    input: PathBuf,

    /// Run limits as MIN:MAX. Repeat for several configurations; defaults
    /// to 1:3 and 4:10.
    #[arg(short, long = "limits", value_name = "MIN:MAX")]
    limits: Vec<RunLimits>,

    /// Abort any single search that runs longer than this many milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Run the searches one after another instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read grid from {}", args.input.display()))?;
    let grid: CostGrid = text
        .parse()
        .with_context(|| format!("Malformed grid in {}", args.input.display()))?;

    let limits = if args.limits.is_empty() {
        vec![RunLimits::CRUCIBLE, RunLimits::ULTRA]
    } else {
        args.limits
    };
    let exec = if args.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel
    };
    let budget = args.timeout_ms.map(Duration::from_millis);

    let (rows, cols) = grid.dimensions();
    log::info!(
        "{rows}x{cols} grid, {} configuration(s), {exec:?}",
        limits.len()
    );

    for (l, res) in limits.iter().zip(min_costs(&grid, &limits, budget, exec)) {
        let cost = res.map_err(|e| {
            let context = failure_context(*l, &e);
            anyhow::Error::new(e).context(context)
        })?;
        println!("{cost}");
    }

    Ok(())
}

/// Context line for a search that did not produce a cost.
fn failure_context(limits: RunLimits, err: &SearchError) -> String {
    match err {
        e if e.is_unreachable() => format!("No route under limits {limits}"),
        SearchError::TimedOut { .. } => format!("Search under limits {limits} timed out"),
        _ => format!("Search under limits {limits} failed"),
    }
}
