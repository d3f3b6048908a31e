//! Deterministic per-ant and engine-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each ant gets its own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (ant_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ant IDs uniformly across the seed space.
//! This means:
//!
//! - Ants never share RNG state, so constructions within a step can run on
//!   any number of threads and still draw the same numbers.
//! - An ant's stream persists across steps; step `k` continues where step
//!   `k - 1` left off rather than replaying the same draws.
//! - Growing the colony does not disturb the streams of existing ants.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AntId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AntRng ────────────────────────────────────────────────────────────────────

/// Per-ant deterministic RNG.
///
/// The engine keeps one per ant in a `Vec<AntRng>` indexed by `AntId`.  Each
/// Rayon worker receives exclusive `&mut` access to the RNGs of the ants it
/// runs, so no synchronisation is ever needed.
pub struct AntRng(SmallRng);

impl AntRng {
    /// Seed deterministically from the run's seed and an ant ID.
    pub fn new(run_seed: u64, ant: AntId) -> Self {
        let seed = run_seed ^ (ant.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AntRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Uniform index in `[0, n)`.  `n` must be non-zero.
    #[inline]
    pub fn index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Engine-level RNG for one-off global operations (graph generation).
///
/// Used only in single-threaded contexts.  Ant streams are seeded from the
/// run seed directly, not from this generator, so graph generation and
/// colony behaviour stay independent.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Uniform index in `[0, n)`.  `n` must be non-zero.
    #[inline]
    pub fn index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}
