//! `aco-engine` — step loop orchestrator for the rust_aco framework.
//!
//! # Two-phase step
//!
//! ```text
//! for step in 0..n:
//!   ① Construct — call PathConstructor::construct once per ant, each with
//!                 its own AntRng (parallel with the `parallel` feature).
//!   ② Fold      — in ascending AntId order: score successes with
//!                 path_cost; a strictly cheaper one replaces the best.
//!   ③ Evaporate — every edge scaled by (1 - evaporation).
//!   ④ Deposit   — q / cost along every successful path.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the construction phase on Rayon's thread pool.     |
//! | `serde`    | `Serialize`/`Deserialize` on snapshots and core types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aco_engine::{Engine, NoopObserver};
//!
//! let mut engine = Engine::initialize(20, 42);
//! engine.run_steps(100, &mut NoopObserver);
//! println!("{:?}", engine.current_best());
//! ```
//!
//! Hand-built graphs and the open start→goal regime go through
//! [`EngineBuilder`]:
//!
//! ```rust,ignore
//! let engine = EngineBuilder::new(graph)
//!     .params(ColonyParams::default().with_ant_count(50))
//!     .mode(PathMode::open_route(NodeId(0), NodeId(9), graph_len))
//!     .build()?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver, StepSummary};
pub use snapshot::{BestSnapshot, BestSolution, EdgeView, GraphSnapshot, NodeView};
