//! Grid vocabulary shared by the path searches.
//!
//! A [`Grid`] is a fixed-size rectangular matrix of [`Cell`]s with exactly
//! one start and one goal. Grids are parsed from the marker format
//!
//! ```text
//! S . . # G
//! # # . # .
//! . . . . .
//! ```
//!
//! where `S` is the start, `G` the goal, `#` a blocked cell and `.` an open
//! cell. Whitespace between markers and blank lines are ignored.
//!
//! # Key Components
//!
//! - [`Coord`] — `(row, col)` position with Manhattan distance
//! - [`Cell`] — cell state
//! - [`Grid`] — immutable cell matrix with validated endpoints
//! - [`random_grid`] — reproducible random grids for benches and demos

mod generate;
mod types;

pub use generate::random_grid;
pub use types::{Cell, Coord, Grid};
