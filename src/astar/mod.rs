//! A* best-first search over a [`Grid`](crate::grid::Grid).
//!
//! Finds a minimum-step 4-directional path from a start cell to a goal cell,
//! or reports that none exists. Frontier ties on f-cost are broken by
//! insertion order, so results are deterministic.
//!
//! # Key Components
//!
//! - [`AStarConfig`] — expansion budget and heuristic
//! - [`AStarRunner`] — entry points: `run`, `search`, `snapshots`
//! - [`AStarResult`] — status, path, expanded set and counters
//! - [`Snapshots`] — lazy per-expansion stream for step-by-step display
//!
//! # References
//!
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths"

mod config;
mod runner;
mod types;

pub use config::{AStarConfig, Heuristic};
pub use runner::{AStarResult, AStarRunner, SearchStatus, Snapshot, Snapshots};
pub use types::{NodeId, SearchNode};
