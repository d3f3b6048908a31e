//! colony — smallest end-to-end run of the rust_aco engine.
//!
//! Two runs back to back:
//!
//! 1. **Closed tour** on a random graph: `colony [NODES] [STEPS]`
//!    (defaults 20 and 100).  Writes `graph.json`, `best.json`,
//!    `step_history.csv` and `best_history.csv` to `output/colony/tour`.
//! 2. **Open route** from the depot to the customer on the hand-built
//!    delivery network in [`network`], written to `output/colony/route`.
//!
//! Set `RUST_LOG=debug` to see every step.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aco_core::{ColonyParams, PathMode};
use aco_engine::{BestSolution, Engine, EngineBuilder, EngineObserver, StepSummary};
use aco_output::{CsvHistoryWriter, EngineOutputObserver, JsonSnapshotWriter, OutputWriter};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_NODES: usize = 20;
const DEFAULT_STEPS: u64   = 100;
const SEED:          u64   = 42;
const ROUTE_STEPS:   u64   = 30;

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        EngineOutputObserver<W>,
    steps:        usize,
    improvements: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: EngineOutputObserver<W>) -> Self {
        Self { inner, steps: 0, improvements: 0 }
    }
}

impl<W: OutputWriter> EngineObserver for CountingObserver<W> {
    fn on_new_best(&mut self, step: u64, best: &BestSolution) {
        self.improvements += 1;
        self.inner.on_new_best(step, best);
    }

    fn on_step_end(&mut self, summary: &StepSummary) {
        self.steps += 1;
        self.inner.on_step_end(summary);
    }

    fn on_run_end(&mut self, steps_run: u64) {
        self.inner.on_run_end(steps_run);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_arg<T: std::str::FromStr>(pos: usize, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::args().nth(pos) {
        Some(s) => s.parse().with_context(|| format!("argument {pos}: {s:?}")),
        None => Ok(default),
    }
}

/// Run `steps` steps with CSV + JSON output in `dir`, then print a summary.
fn run_with_output(engine: &mut Engine, steps: u64, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let history = CsvHistoryWriter::new(dir)?;
    let snapshots = JsonSnapshotWriter::new(dir, &engine.current_graph())?;
    let mut obs = CountingObserver::new(EngineOutputObserver::new((history, snapshots)));

    let t0 = Instant::now();
    engine.run_steps(steps, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("{} complete in {:.3} s", engine.mode(), elapsed.as_secs_f64());
    println!("  step_history.csv : {} rows", obs.steps);
    println!("  best_history.csv : {} rows", obs.improvements);

    match engine.best() {
        Some(best) => {
            let path: Vec<String> = best.path.iter().map(|n| n.0.to_string()).collect();
            println!("  best cost        : {:.3} (step {})", best.cost, best.found_at_step);
            println!("  best path        : {}", path.join(" → "));
        }
        None => println!("  no ant completed a path"),
    }
    println!();
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let nodes = parse_arg(1, DEFAULT_NODES)?;
    let steps = parse_arg(2, DEFAULT_STEPS)?;

    println!("=== colony — rust_aco ===");
    println!("Nodes: {nodes}  |  Steps: {steps}  |  Seed: {SEED}");
    println!();

    // 1. Closed tour on a random graph.
    let mut tour = Engine::initialize(nodes, SEED);
    let graph = tour.graph();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        connected = graph.is_connected(),
        "random graph ready",
    );
    run_with_output(&mut tour, steps, Path::new("output/colony/tour"))?;

    // 2. Open route on the delivery network.
    let (network, depot, customer) = build_network()?;
    let mode = PathMode::open_route(depot, customer, network.node_count());
    let params = ColonyParams::default().with_ant_count(10).with_seed(SEED);
    let mut route = EngineBuilder::new(network).params(params).mode(mode).build()?;
    run_with_output(&mut route, ROUTE_STEPS, Path::new("output/colony/route"))?;

    Ok(())
}
