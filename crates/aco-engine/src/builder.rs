//! Fluent builder for constructing an [`Engine`].

use aco_colony::{PathConstructor, RouletteConstructor};
use aco_core::{AcoError, ColonyParams, PathMode};
use aco_graph::Graph;

use crate::{Engine, EngineResult};

/// Fluent builder for [`Engine<C>`].
///
/// # Required inputs
///
/// - [`Graph`], from [`aco_graph::GraphGenerator`] or a hand-built
///   [`aco_graph::GraphBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                     |
/// |---------------------|-----------------------------|
/// | `.params(p)`        | `ColonyParams::default()`   |
/// | `.mode(m)`          | `PathMode::ClosedTour`      |
/// | `.constructor(c)`   | `RouletteConstructor`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(graph)
///     .params(ColonyParams::default().with_seed(7))
///     .build()?;
/// engine.run_steps(50, &mut NoopObserver);
/// ```
pub struct EngineBuilder<C: PathConstructor = RouletteConstructor> {
    graph:       Graph,
    params:      ColonyParams,
    mode:        PathMode,
    constructor: C,
}

impl EngineBuilder<RouletteConstructor> {
    /// Create a builder over `graph` with default params, closed-tour mode,
    /// and the roulette-wheel constructor.
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            params:      ColonyParams::default(),
            mode:        PathMode::default(),
            constructor: RouletteConstructor,
        }
    }
}

impl<C: PathConstructor> EngineBuilder<C> {
    pub fn params(mut self, params: ColonyParams) -> Self {
        self.params = params;
        self
    }

    /// Select closed-tour or open start→goal construction.
    pub fn mode(mut self, mode: PathMode) -> Self {
        self.mode = mode;
        self
    }

    /// Swap in a different path constructor.
    pub fn constructor<D: PathConstructor>(self, constructor: D) -> EngineBuilder<D> {
        EngineBuilder {
            graph:  self.graph,
            params: self.params,
            mode:   self.mode,
            constructor,
        }
    }

    /// Validate inputs, seed the pheromone matrix and per-ant RNGs, and
    /// return a ready-to-step [`Engine`].
    ///
    /// # Errors
    ///
    /// [`EngineError::Config`][crate::EngineError::Config] when the graph has
    /// fewer than two nodes, a parameter is out of range, or the open-route
    /// endpoints or budget are invalid for this graph.
    pub fn build(self) -> EngineResult<Engine<C>> {
        let node_count = self.graph.node_count();
        if node_count < 2 {
            return Err(AcoError::TooFewNodes(node_count).into());
        }
        self.params.validate()?;
        self.mode.validate(node_count)?;

        Ok(Engine::assemble(self.graph, self.params, self.mode, self.constructor))
    }
}
