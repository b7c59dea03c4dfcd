//! Board state and occupancy strategies.

/// A complete solution: `columns()[row]` is the column of the queen on `row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Board size.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// Checks the placement from scratch: every column in range, no two
    /// queens share a column or a diagonal.
    pub fn is_valid(&self) -> bool {
        let n = self.columns.len();
        self.columns.iter().enumerate().all(|(r1, &c1)| {
            c1 < n
                && self.columns[r1 + 1..]
                    .iter()
                    .enumerate()
                    .all(|(offset, &c2)| c1 != c2 && c1.abs_diff(c2) != offset + 1)
        })
    }
}

/// Attack bookkeeping for a partially filled board.
///
/// Rows are filled top to bottom, so `is_safe(row, _)` only has to consider
/// queens on rows `0..row`. `place` and `remove` are always called in
/// matching pairs.
pub trait Occupancy {
    /// Empty tracker for an `n x n` board.
    fn with_size(n: usize) -> Self;

    fn is_safe(&self, row: usize, col: usize) -> bool;

    fn place(&mut self, row: usize, col: usize);

    fn remove(&mut self, row: usize, col: usize);
}

/// Plain backtracking: an `n x n` cell matrix re-scanned on every check.
#[derive(Debug, Clone)]
pub struct ScanBoard {
    n: usize,
    cells: Vec<bool>,
}

impl ScanBoard {
    fn occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.n + col]
    }
}

impl Occupancy for ScanBoard {
    fn with_size(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    fn is_safe(&self, row: usize, col: usize) -> bool {
        // Column above.
        if (0..row).any(|r| self.occupied(r, col)) {
            return false;
        }
        // Up-left diagonal.
        if (1..=row.min(col)).any(|d| self.occupied(row - d, col - d)) {
            return false;
        }
        // Up-right diagonal.
        let right = self.n - 1 - col;
        !(1..=row.min(right)).any(|d| self.occupied(row - d, col + d))
    }

    fn place(&mut self, row: usize, col: usize) {
        self.cells[row * self.n + col] = true;
    }

    fn remove(&mut self, row: usize, col: usize) {
        self.cells[row * self.n + col] = false;
    }
}

/// Branch-and-bound: column, forward-diagonal (`row + col`) and
/// backward-diagonal (`row - col + n - 1`) occupancy flags.
#[derive(Debug, Clone)]
pub struct ConflictSets {
    n: usize,
    columns: Vec<bool>,
    forward: Vec<bool>,
    backward: Vec<bool>,
}

impl ConflictSets {
    fn diagonals(&self, row: usize, col: usize) -> (usize, usize) {
        (row + col, row + self.n - 1 - col)
    }

    fn set(&mut self, row: usize, col: usize, value: bool) {
        let (fs, bs) = self.diagonals(row, col);
        self.columns[col] = value;
        self.forward[fs] = value;
        self.backward[bs] = value;
    }
}

impl Occupancy for ConflictSets {
    fn with_size(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            columns: vec![false; n],
            forward: vec![false; diagonals],
            backward: vec![false; diagonals],
        }
    }

    fn is_safe(&self, row: usize, col: usize) -> bool {
        let (fs, bs) = self.diagonals(row, col);
        !(self.columns[col] || self.forward[fs] || self.backward[bs])
    }

    fn place(&mut self, row: usize, col: usize) {
        self.set(row, col, true);
    }

    fn remove(&mut self, row: usize, col: usize) {
        self.set(row, col, false);
    }
}

/// Partial assignment for rows `0..assignment.len()` plus its occupancy.
#[derive(Debug, Clone)]
pub(crate) struct Board<O> {
    pub(crate) n: usize,
    pub(crate) assignment: Vec<usize>,
    pub(crate) occupancy: O,
}

impl<O: Occupancy> Board<O> {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            assignment: Vec::with_capacity(n),
            occupancy: O::with_size(n),
        }
    }

    pub(crate) fn place(&mut self, row: usize, col: usize) {
        debug_assert_eq!(self.assignment.len(), row);
        self.assignment.push(col);
        self.occupancy.place(row, col);
    }

    pub(crate) fn remove(&mut self, row: usize, col: usize) {
        debug_assert_eq!(self.assignment.last(), Some(&col));
        self.assignment.pop();
        self.occupancy.remove(row, col);
    }
}
