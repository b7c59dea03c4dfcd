//! Informed and backtracking search over discrete state spaces.
//!
//! Provides two independent solvers:
//!
//! - **A\***: Best-first search over a 2D grid with blocked cells, using
//!   the Manhattan distance heuristic and FIFO tie-breaking. Returns a
//!   shortest path and the expanded set, reports unreachable goals, and
//!   supports an optional expansion budget.
//! - **N-Queens**: Enumeration of all non-attacking placements by
//!   row-by-row backtracking, either re-scanning the board or with
//!   incremental column/diagonal trackers (branch-and-bound).
//!
//! # Example
//!
//! ```
//! use u_search::astar::{AStarConfig, AStarRunner};
//! use u_search::grid::Grid;
//! use u_search::queens::{QueensConfig, QueensRunner};
//!
//! let grid: Grid = "S..#G\n##.#.\n.....\n###.#\n.....".parse().unwrap();
//! let path = AStarRunner::run(&grid, &AStarConfig::default()).unwrap();
//! assert_eq!(path.steps(), Some(8));
//!
//! let queens = QueensRunner::run(8, &QueensConfig::default()).unwrap();
//! assert_eq!(queens.count, 92);
//! ```
//!
//! # Architecture
//!
//! Every call is synchronous and owns its own state (node arena, frontier,
//! board); nothing is shared between calls. Drawing and input handling are
//! left to callers; [`render`] offers plain-text helpers and the `cli`
//! feature builds the `u-search` binary on top of the public API.

pub mod astar;
pub mod error;
pub mod grid;
pub mod queens;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::SearchError;
