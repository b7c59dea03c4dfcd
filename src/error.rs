//! Error taxonomy shared by the grid search and N-Queens solvers.
//!
//! Only invalid input is an error. An unreachable goal or an exhausted
//! expansion budget are ordinary outcomes reported through
//! [`SearchStatus`](crate::astar::SearchStatus).

use crate::grid::Coord;
use thiserror::Error;

/// Input rejected before any search or recursion starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("unknown cell marker {marker:?} at row {row}, column {col}")]
    UnknownMarker { row: usize, col: usize, marker: char },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has no start cell 'S'")]
    MissingStart,

    #[error("grid has no goal cell 'G'")]
    MissingGoal,

    #[error("grid has a second start cell at {second} (first at {first})")]
    DuplicateStart { first: Coord, second: Coord },

    #[error("grid has a second goal cell at {second} (first at {first})")]
    DuplicateGoal { first: Coord, second: Coord },

    #[error("{coord} lies outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    #[error("endpoint {coord} is a blocked cell")]
    BlockedEndpoint { coord: Coord },

    #[error("invalid board size {input:?}: expected a non-negative integer")]
    InvalidBoardSize { input: String },

    #[error("wall density must be in [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
