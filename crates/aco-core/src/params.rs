//! Colony parameters.
//!
//! The defaults are the classic Ant System values the engine was tuned
//! with: proximity (`beta = 5`) dominates early search and half of every
//! trail evaporates each step.

use crate::{AcoError, AcoResult};

pub const DEFAULT_ANT_COUNT: usize = 20;
pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 5.0;
pub const DEFAULT_EVAPORATION: f64 = 0.5;
pub const DEFAULT_Q: f64 = 100.0;
pub const DEFAULT_INITIAL_PHEROMONE: f64 = 1.0;
pub const DEFAULT_SEED: u64 = 42;

/// Tuning knobs for one colony.
///
/// Construct with `ColonyParams::default()` and override fields, or use the
/// `with_*` setters.  Validated once by the engine builder; invalid values
/// are fatal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyParams {
    /// Ants per step.  Must be at least 1.
    pub ant_count: usize,

    /// Weight of the pheromone trail in selection.  `>= 0`.
    pub alpha: f64,

    /// Weight of the `1/distance` heuristic in selection.  `>= 0`.
    pub beta: f64,

    /// Fraction of pheromone lost per step, in `[0, 1]`.
    pub evaporation: f64,

    /// Deposit numerator: a successful path of cost `c` adds `q / c` to
    /// each edge it used.  `> 0`.
    pub q: f64,

    /// Pheromone placed on every edge at initialization.  `> 0`.
    pub initial_pheromone: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for ColonyParams {
    fn default() -> Self {
        Self {
            ant_count:         DEFAULT_ANT_COUNT,
            alpha:             DEFAULT_ALPHA,
            beta:              DEFAULT_BETA,
            evaporation:       DEFAULT_EVAPORATION,
            q:                 DEFAULT_Q,
            initial_pheromone: DEFAULT_INITIAL_PHEROMONE,
            seed:              DEFAULT_SEED,
        }
    }
}

impl ColonyParams {
    pub fn with_ant_count(mut self, ant_count: usize) -> Self {
        self.ant_count = ant_count;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation(mut self, evaporation: f64) -> Self {
        self.evaporation = evaporation;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_initial_pheromone(mut self, initial_pheromone: f64) -> Self {
        self.initial_pheromone = initial_pheromone;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> AcoResult<()> {
        if self.ant_count == 0 {
            return Err(AcoError::NoAnts);
        }
        check("alpha", self.alpha, ">= 0", |v| v >= 0.0)?;
        check("beta", self.beta, ">= 0", |v| v >= 0.0)?;
        check("evaporation", self.evaporation, "0..=1", |v| (0.0..=1.0).contains(&v))?;
        check("q", self.q, "> 0", |v| v > 0.0)?;
        check("initial_pheromone", self.initial_pheromone, "> 0", |v| v > 0.0)?;
        Ok(())
    }
}

fn check(
    name:     &'static str,
    value:    f64,
    expected: &'static str,
    ok:       impl Fn(f64) -> bool,
) -> AcoResult<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(AcoError::Param { name, value, expected })
    }
}
