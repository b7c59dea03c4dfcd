//! Reproducible random grids.

use super::types::{Cell, Grid};
use crate::error::SearchError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a `rows x cols` grid with the start in the top-left corner and
/// the goal in the bottom-right corner.
///
/// Every other cell is blocked with probability `density`. The same seed
/// always produces the same grid. The goal is not guaranteed to be
/// reachable.
///
/// # Examples
///
/// ```
/// use u_search::grid::{random_grid, Coord};
///
/// let grid = random_grid(8, 12, 0.25, 7).unwrap();
/// assert_eq!(grid.start(), Coord::new(0, 0));
/// assert_eq!(grid.goal(), Coord::new(7, 11));
/// assert_eq!(grid, random_grid(8, 12, 0.25, 7).unwrap());
/// ```
pub fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Grid, SearchError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(SearchError::InvalidDensity(density));
    }
    if rows == 0 || cols == 0 {
        return Err(SearchError::EmptyGrid);
    }
    let cells = rows.checked_mul(cols).ok_or_else(|| {
        SearchError::InvalidConfig(format!("random grid {rows}x{cols} is too large"))
    })?;
    if cells < 2 {
        return Err(SearchError::InvalidConfig(
            "random grid needs at least two cells for start and goal".into(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix: Vec<Vec<Cell>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(density) {
                        Cell::Blocked
                    } else {
                        Cell::Open
                    }
                })
                .collect()
        })
        .collect();

    matrix[0][0] = Cell::Start;
    matrix[rows - 1][cols - 1] = Cell::Goal;

    Grid::from_rows(matrix)
}
