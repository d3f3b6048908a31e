//! The `Engine` struct and its step loop.

use aco_colony::{AntOutcome, ColonyContext, PathConstructor, PheromoneMatrix, RouletteConstructor, path_cost};
use aco_core::{AntId, AntRng, ColonyParams, NodeId, PathMode, SimRng};
use aco_graph::{Graph, GraphGenerator};
use tracing::{debug, info, warn};

use crate::{BestSnapshot, BestSolution, EngineObserver, GraphSnapshot, NoopObserver, StepSummary};

/// The colony runner.
///
/// `Engine<C>` owns the graph, the pheromone matrix, one RNG per ant, and
/// the best solution so far.  Each [`step`][Self::step] is one generation:
///
/// 1. **Construction** (optionally parallel with the `parallel` feature):
///    call [`PathConstructor::construct`] once per ant against a read-only
///    [`ColonyContext`].
/// 2. **Fold** (sequential, ascending `AntId`): score successes; a strictly
///    cheaper path replaces the best, ties do not.
/// 3. **Evaporate** every edge, then **deposit** `q / cost` along each
///    successful path.  Failed ants deposit nothing.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder] or
/// [`Engine::initialize`].
pub struct Engine<C: PathConstructor = RouletteConstructor> {
    graph:       Graph,
    pheromone:   PheromoneMatrix,
    params:      ColonyParams,
    mode:        PathMode,
    /// One stream per ant, indexed by `AntId`.  Persist across steps.
    rngs:        Vec<AntRng>,
    best:        Option<BestSolution>,
    step:        u64,
    constructor: C,
}

impl Engine<RouletteConstructor> {
    /// Generate a random graph of `node_count` nodes (at least 2) and
    /// return a closed-tour engine with default parameters.
    ///
    /// `seed` drives both the graph and every ant.
    pub fn initialize(node_count: usize, seed: u64) -> Self {
        let node_count = node_count.max(2);
        let graph = GraphGenerator::new(node_count).generate(&mut SimRng::new(seed));
        let params = ColonyParams::default().with_seed(seed);

        info!(node_count, edges = graph.edge_count(), seed, "engine initialized");
        Self::assemble(graph, params, PathMode::ClosedTour, RouletteConstructor)
    }
}

impl<C: PathConstructor> Engine<C> {
    /// Wire up an engine from already-validated parts.
    pub(crate) fn assemble(
        graph:       Graph,
        params:      ColonyParams,
        mode:        PathMode,
        constructor: C,
    ) -> Self {
        let pheromone = PheromoneMatrix::new(&graph, params.initial_pheromone);
        let rngs = (0..params.ant_count)
            .map(|i| AntRng::new(params.seed, AntId(i as u32)))
            .collect();
        Self { graph, pheromone, params, mode, rngs, best: None, step: 0, constructor }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance exactly one generation.
    pub fn step(&mut self) -> StepSummary {
        self.step_with(&mut NoopObserver)
    }

    /// Advance one generation, reporting to `observer`.
    pub fn step_with<O: EngineObserver>(&mut self, observer: &mut O) -> StepSummary {
        let step = self.step;
        observer.on_step_start(step);

        let outcomes = self.construct_all();

        // ── Fold in AntId order ───────────────────────────────────────────
        let closing = self.mode.is_closed();
        let mut scored: Vec<(Vec<NodeId>, f64)> = Vec::with_capacity(outcomes.len());
        let mut failures = 0;
        let mut step_best: Option<f64> = None;

        for (i, outcome) in outcomes.into_iter().enumerate() {
            let path = match outcome {
                AntOutcome::Succeeded(path) => path,
                AntOutcome::Failed(_) => {
                    failures += 1;
                    continue;
                }
            };
            let cost = match path_cost(&self.graph, &path, self.mode) {
                Some(c) if c.is_finite() && c > 0.0 => c,
                _ => {
                    warn!(step, ant = i, "constructor returned a path that is not a walk of the graph");
                    failures += 1;
                    continue;
                }
            };

            if step_best.is_none_or(|b| cost < b) {
                step_best = Some(cost);
            }
            if self.best.as_ref().is_none_or(|b| cost < b.cost) {
                let best = BestSolution { cost, path: path.clone(), found_at_step: step };
                info!(step, cost, "new best");
                observer.on_new_best(step, &best);
                self.best = Some(best);
            }
            scored.push((path, cost));
        }

        // ── Evaporate, then deposit ───────────────────────────────────────
        self.pheromone.evaporate(&self.graph, self.params.evaporation);
        for (path, cost) in &scored {
            self.pheromone.deposit(&self.graph, path, closing, self.params.q / cost);
        }

        let summary = StepSummary {
            step,
            successes: scored.len(),
            failures,
            step_best,
            best_cost: self.best.as_ref().map(|b| b.cost),
        };
        debug!(
            step,
            successes = summary.successes,
            failures,
            step_best = ?summary.step_best,
            best = ?summary.best_cost,
            "step complete",
        );
        observer.on_step_end(&summary);

        self.step += 1;
        summary
    }

    /// Run exactly `n` steps from the current position.
    pub fn run_steps<O: EngineObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_with(observer);
        }
        observer.on_run_end(n);
    }

    /// Nodes and edges for rendering.
    pub fn current_graph(&self) -> GraphSnapshot {
        GraphSnapshot::of(&self.graph)
    }

    /// Best cost and path so far; `cost: None` until some ant succeeds.
    pub fn current_best(&self) -> BestSnapshot {
        BestSnapshot::from(self.best.as_ref())
    }

    pub fn best(&self) -> Option<&BestSolution> {
        self.best.as_ref()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    pub fn params(&self) -> &ColonyParams {
        &self.params
    }

    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// Steps completed so far.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn ant_count(&self) -> usize {
        self.rngs.len()
    }

    // ── Construction phase ────────────────────────────────────────────────

    /// One outcome per ant, in `AntId` order.
    ///
    /// With the `parallel` Cargo feature the ants run on Rayon's thread
    /// pool.  Each ant only touches its own RNG, so the outcomes are the
    /// same either way.
    fn construct_all(&mut self) -> Vec<AntOutcome> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = ColonyContext::new(
            &self.graph,
            &self.pheromone,
            &self.params,
            self.mode,
        );
        let constructor = &self.constructor;
        let rngs = &mut self.rngs;

        #[cfg(not(feature = "parallel"))]
        {
            rngs.iter_mut()
                .enumerate()
                .map(|(i, rng)| constructor.construct(AntId(i as u32), &ctx, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.par_iter_mut()
                .enumerate()
                .map(|(i, rng)| constructor.construct(AntId(i as u32), &ctx, rng))
                .collect()
        }
    }
}
