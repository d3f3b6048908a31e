//! `aco-graph` — the static weighted graph the colony searches.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `Graph`, `GraphBuilder`, `Edge`, `MIN_EDGE_WEIGHT`        |
//! | [`matrix`]    | `DistanceMatrix` (`Option<f64>` cells, symmetric)         |
//! | [`generator`] | `GraphGenerator`, `WeightModel`                           |
//! | [`reach`]     | BFS reachability / connectivity on `Graph`                |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod generator;
pub mod graph;
pub mod matrix;
pub mod reach;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use generator::{GraphGenerator, WeightModel};
pub use graph::{Edge, Graph, GraphBuilder, MIN_EDGE_WEIGHT};
pub use matrix::DistanceMatrix;
