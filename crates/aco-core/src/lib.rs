//! `aco-core` — foundational types for the `rust_aco` engine.
//!
//! This crate is a dependency of every other `aco-*` crate.  It has no
//! `aco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `AntId`                                     |
//! | [`geo`]     | `Point`, Euclidean distance                           |
//! | [`rng`]     | `AntRng` (per-ant), `SimRng` (engine-level)           |
//! | [`params`]  | `ColonyParams` and its defaults                       |
//! | [`mode`]    | `PathMode` (closed tour / open route)                 |
//! | [`error`]   | `AcoError`, `AcoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AcoError, AcoResult};
pub use geo::{COORD_EXTENT, Point};
pub use ids::{AntId, NodeId};
pub use mode::PathMode;
pub use params::ColonyParams;
pub use rng::{AntRng, SimRng};
