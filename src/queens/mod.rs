//! N-Queens enumeration by backtracking.
//!
//! Places one queen per row, top to bottom, and backtracks on conflicts.
//! Two attack tests are available and produce identical output:
//!
//! - **Backtracking** ([`ScanBoard`]): re-scans the board, O(N) per check.
//! - **Branch-and-bound** ([`ConflictSets`]): incremental column and
//!   diagonal trackers, O(1) per check.
//!
//! # Key Components
//!
//! - [`QueensConfig`] — strategy, solution collection, parallel split
//! - [`QueensRunner`] — entry point
//! - [`QueensResult`] — solution count, solutions, search statistics
//! - [`Occupancy`] — the attack-test seam both strategies implement
//! - [`Placement`] — one complete solution (row → column)

mod config;
mod runner;
mod types;

pub use config::{board_size_from_i64, parse_board_size, QueensConfig, Strategy};
pub use runner::{QueensResult, QueensRunner};
pub use types::{ConflictSets, Occupancy, Placement, ScanBoard};
