//! Grid cells, coordinates and parsing.

use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// A `(row, col)` grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance `|r1 - r2| + |c1 - c2|`.
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Open,
    Blocked,
    Start,
    Goal,
}

impl Cell {
    /// Parses a single marker character.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Blocked),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => '#',
            Cell::Start => 'S',
            Cell::Goal => 'G',
        }
    }

    /// Start and goal cells are walkable like open cells.
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Blocked)
    }
}

/// A rectangular, immutable matrix of cells with one start and one goal.
///
/// # Examples
///
/// ```
/// use u_search::grid::{Coord, Grid};
///
/// let grid: Grid = "S.#\n..G".parse().unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.start(), Coord::new(0, 0));
/// assert_eq!(grid.goal(), Coord::new(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Builds a grid from a row matrix, validating shape and endpoints.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, SearchError> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(SearchError::EmptyGrid),
        };

        let mut cells = Vec::with_capacity(rows.len() * expected);
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SearchError::RaggedRow {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
            for (c, &cell) in row.iter().enumerate() {
                let here = Coord::new(r, c);
                match cell {
                    Cell::Start => {
                        if let Some(first) = start {
                            return Err(SearchError::DuplicateStart { first, second: here });
                        }
                        start = Some(here);
                    }
                    Cell::Goal => {
                        if let Some(first) = goal {
                            return Err(SearchError::DuplicateGoal { first, second: here });
                        }
                        goal = Some(here);
                    }
                    Cell::Open | Cell::Blocked => {}
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            cells,
            start: start.ok_or(SearchError::MissingStart)?,
            goal: goal.ok_or(SearchError::MissingGoal)?,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a validated grid; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    pub fn is_passable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_passable)
    }

    /// Row-major index of `coord`.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| self.row_major(coord))
    }

    /// Row-major index without the bounds check. `coord` must be inside
    /// the grid.
    pub(crate) fn row_major(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Coordinate for a row-major index. The index must be `< len()`.
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }

    /// Orthogonal neighbors of `coord` in the order down, left, up, right,
    /// skipping positions outside the grid. Blocked cells are included.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        const MOVES: [(isize, isize); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];
        MOVES.iter().filter_map(move |&(dr, dc)| {
            let row = coord.row.checked_add_signed(dr)?;
            let col = coord.col.checked_add_signed(dc)?;
            let next = Coord::new(row, col);
            self.contains(next).then_some(next)
        })
    }

    /// Checks that `coord` can serve as a search endpoint.
    pub fn check_endpoint(&self, coord: Coord) -> Result<(), SearchError> {
        match self.get(coord) {
            None => Err(SearchError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            }),
            Some(Cell::Blocked) => Err(SearchError::BlockedEndpoint { coord }),
            Some(_) => Ok(()),
        }
    }
}

impl FromStr for Grid {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let r = rows.len();
            let row = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .enumerate()
                .map(|(c, marker)| {
                    Cell::from_marker(marker).ok_or(SearchError::UnknownMarker {
                        row: r,
                        col: c,
                        marker,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|c| c.marker().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S . . # G
# # . # .
. . . . .
# # # . #
. . . . .";

    #[test]
    fn test_index_of_agrees_with_coord_of() {
        let grid: Grid = MAZE.parse().unwrap();
        for i in 0..grid.len() {
            let coord = grid.coord_of(i);
            assert_eq!(grid.index_of(coord), Some(i));
            assert_eq!(grid.row_major(coord), i);
        }
        assert_eq!(grid.index_of(Coord::new(5, 0)), None);
        assert_eq!(grid.index_of(Coord::new(0, 5)), None);
    }

    #[test]
    fn test_parse_worked_example() {
        let grid: Grid = MAZE.parse().unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.start(), Coord::new(0, 0));
        assert_eq!(grid.goal(), Coord::new(0, 4));
        assert_eq!(grid.get(Coord::new(0, 3)), Some(Cell::Blocked));
        assert_eq!(grid.get(Coord::new(2, 2)), Some(Cell::Open));
        assert_eq!(grid.get(Coord::new(5, 0)), None);
    }

    #[test]
    fn test_parse_ignores_spacing_and_blank_lines() {
        let compact: Grid = "S..#G\n##.#.\n".parse().unwrap();
        let spaced: Grid = "\nS . . # G\n\n# # . # .\n".parse().unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_display_roundtrips_markers() {
        let grid: Grid = MAZE.parse().unwrap();
        let again: Grid = grid.to_string().parse().unwrap();
        assert_eq!(grid, again);
        assert!(grid.to_string().starts_with("S . . # G\n"));
    }

    #[test]
    fn test_reject_empty() {
        assert_eq!("".parse::<Grid>(), Err(SearchError::EmptyGrid));
        assert_eq!("  \n\n".parse::<Grid>(), Err(SearchError::EmptyGrid));
    }

    #[test]
    fn test_reject_ragged_rows() {
        let err = "S..\n.G".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            SearchError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_reject_unknown_marker() {
        let err = "S.x\n..G".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            SearchError::UnknownMarker {
                row: 0,
                col: 2,
                marker: 'x'
            }
        );
    }

    #[test]
    fn test_reject_missing_endpoints() {
        assert_eq!("...\n..G".parse::<Grid>(), Err(SearchError::MissingStart));
        assert_eq!("S..\n...".parse::<Grid>(), Err(SearchError::MissingGoal));
    }

    #[test]
    fn test_reject_duplicate_endpoints() {
        let err = "S.S\n..G".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            SearchError::DuplicateStart {
                first: Coord::new(0, 0),
                second: Coord::new(0, 2)
            }
        );
        assert!(matches!(
            "SGG".parse::<Grid>(),
            Err(SearchError::DuplicateGoal { .. })
        ));
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let grid: Grid = MAZE.parse().unwrap();
        let corner: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        let center: Vec<Coord> = grid.neighbors(Coord::new(2, 2)).collect();
        assert_eq!(
            center,
            vec![
                Coord::new(3, 2),
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_check_endpoint() {
        let grid: Grid = MAZE.parse().unwrap();
        assert!(grid.check_endpoint(Coord::new(2, 2)).is_ok());
        assert_eq!(
            grid.check_endpoint(Coord::new(1, 0)),
            Err(SearchError::BlockedEndpoint {
                coord: Coord::new(1, 0)
            })
        );
        assert!(matches!(
            grid.check_endpoint(Coord::new(0, 9)),
            Err(SearchError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(0, 4)), 4);
        assert_eq!(Coord::new(4, 1).manhattan(Coord::new(2, 3)), 4);
        assert!(Coord::new(2, 2).is_adjacent(Coord::new(2, 3)));
        assert!(!Coord::new(2, 2).is_adjacent(Coord::new(3, 3)));
    }

    #[test]
    fn test_index_roundtrip() {
        let grid: Grid = MAZE.parse().unwrap();
        for i in 0..grid.len() {
            assert_eq!(grid.index_of(grid.coord_of(i)), Some(i));
        }
    }
}
