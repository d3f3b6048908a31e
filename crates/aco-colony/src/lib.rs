//! `aco-colony` — the ant side of the engine: trails, walks, and scoring.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`pheromone`]   | `PheromoneMatrix` — evaporate / deposit, always symmetric    |
//! | [`context`]     | `ColonyContext<'a>` — read-only step snapshot shared by ants |
//! | [`constructor`] | `PathConstructor` trait, `RouletteConstructor`, `select_next`|
//! | [`outcome`]     | `AntOutcome`, `FailReason`                                   |
//! | [`evaluate`]    | `path_cost`                                                  |
//!
//! # Design notes
//!
//! A step in aco-engine has two phases:
//!
//! 1. **Construction** (parallel-safe): every ant calls
//!    `PathConstructor::construct` against `&ColonyContext`.  No mutation.
//!
//! 2. **Update** (sequential): outcomes are scored with `path_cost`, then
//!    the engine evaporates and deposits on its `PheromoneMatrix`.
//!
//! This split means `PathConstructor` only needs to be `Send + Sync`; it
//! never holds state that could race.

pub mod constructor;
pub mod context;
pub mod evaluate;
pub mod outcome;
pub mod pheromone;


pub use constructor::{PathConstructor, RouletteConstructor, desirability, select_next};
pub use context::ColonyContext;
pub use evaluate::path_cost;
pub use outcome::{AntOutcome, FailReason};
pub use pheromone::PheromoneMatrix;
