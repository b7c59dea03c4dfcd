//! N-Queens enumeration engine.
//!
//! # Algorithm
//!
//! 1. `place_row(row)`: when `row == n`, record the assignment
//! 2. For each column `c` in `0..n` where `(row, c)` is not attacked:
//!    a. Place the queen (mark column and diagonals)
//!    b. Recurse into `place_row(row + 1)`
//!    c. Remove the queen (unmark), so sibling columns see a clean board
//!
//! The two [`Strategy`] variants differ only in how step 2 tests for
//! attacks; they visit the same tree and return identical results.
//!
//! # Reference
//!
//! Wirth, N. (1976), *Algorithms + Data Structures = Programs*, §3.5.

use super::config::{QueensConfig, Strategy};
use super::types::{Board, ConflictSets, Occupancy, Placement, ScanBoard};
use crate::error::SearchError;

/// Result of an N-Queens run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensResult {
    /// Board size.
    pub n: usize,
    /// Number of distinct solutions.
    pub count: u64,
    /// Every solution in lexicographic column order, or empty when
    /// solution collection is disabled.
    pub solutions: Vec<Placement>,
    /// Queens placed during the search (search-tree nodes below the root).
    pub placements: u64,
}

/// Accumulates solutions for one (sub)search.
struct Tally {
    collect: bool,
    count: u64,
    placements: u64,
    solutions: Vec<Placement>,
}

impl Tally {
    fn new(collect: bool) -> Self {
        Self {
            collect,
            count: 0,
            placements: 0,
            solutions: Vec::new(),
        }
    }

    fn record(&mut self, assignment: &[usize]) {
        self.count += 1;
        if self.collect {
            self.solutions.push(Placement::new(assignment.to_vec()));
        }
    }

    #[cfg(feature = "parallel")]
    fn absorb(&mut self, other: Tally) {
        self.count += other.count;
        self.placements += other.placements;
        self.solutions.extend(other.solutions);
    }

    fn into_result(self, n: usize) -> QueensResult {
        QueensResult {
            n,
            count: self.count,
            solutions: self.solutions,
            placements: self.placements,
        }
    }
}

fn place_row<O: Occupancy>(board: &mut Board<O>, row: usize, tally: &mut Tally) {
    if row == board.n {
        tally.record(&board.assignment);
        return;
    }

    for col in 0..board.n {
        if board.occupancy.is_safe(row, col) {
            board.place(row, col);
            tally.placements += 1;
            place_row(board, row + 1, tally);
            board.remove(row, col);
        }
    }
}

fn solve<O: Occupancy>(n: usize, config: &QueensConfig) -> QueensResult {
    if let Some(result) = solve_parallel::<O>(n, config) {
        return result;
    }

    let mut board = Board::<O>::new(n);
    let mut tally = Tally::new(config.collect_solutions);
    place_row(&mut board, 0, &mut tally);
    tally.into_result(n)
}

/// Runs the subtree under each first-row column as its own rayon task.
///
/// Every square of row 0 is safe on an empty board, so the subtrees
/// partition the sequential search; collecting in column order keeps the
/// solution order identical.
#[cfg(feature = "parallel")]
fn solve_parallel<O: Occupancy>(n: usize, config: &QueensConfig) -> Option<QueensResult> {
    use rayon::prelude::*;

    if !config.parallel || n < 2 {
        return None;
    }

    let collect = config.collect_solutions;
    let subtrees: Vec<Tally> = (0..n)
        .into_par_iter()
        .map(|col| {
            let mut board = Board::<O>::new(n);
            let mut tally = Tally::new(collect);
            board.place(0, col);
            tally.placements += 1;
            place_row(&mut board, 1, &mut tally);
            tally
        })
        .collect();

    let mut total = Tally::new(collect);
    for subtree in subtrees {
        total.absorb(subtree);
    }
    Some(total.into_result(n))
}

#[cfg(not(feature = "parallel"))]
fn solve_parallel<O: Occupancy>(_n: usize, _config: &QueensConfig) -> Option<QueensResult> {
    None
}

/// N-Queens runner.
pub struct QueensRunner;

impl QueensRunner {
    /// Enumerates every placement of `n` non-attacking queens.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::queens::{QueensConfig, QueensRunner};
    ///
    /// let result = QueensRunner::run(6, &QueensConfig::default()).unwrap();
    /// assert_eq!(result.count, 4);
    /// assert!(result.solutions.iter().all(|p| p.is_valid()));
    /// ```
    pub fn run(n: usize, config: &QueensConfig) -> Result<QueensResult, SearchError> {
        if n > config.max_board_size {
            return Err(SearchError::InvalidBoardSize {
                input: n.to_string(),
            });
        }

        Ok(match config.strategy {
            Strategy::Backtracking => solve::<ScanBoard>(n, config),
            Strategy::BranchAndBound => solve::<ConflictSets>(n, config),
        })
    }

    /// Number of solutions only.
    pub fn count(n: usize, strategy: Strategy) -> Result<u64, SearchError> {
        let config = QueensConfig::default()
            .with_strategy(strategy)
            .with_collect_solutions(false);
        Ok(Self::run(n, &config)?.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};
    use std::collections::HashSet;

    const KNOWN_COUNTS: [(usize, u64); 9] = [
        (0, 1),
        (1, 1),
        (2, 0),
        (3, 0),
        (4, 2),
        (5, 10),
        (6, 4),
        (7, 40),
        (8, 92),
    ];

    fn config(strategy: Strategy) -> QueensConfig {
        QueensConfig::default().with_strategy(strategy)
    }

    #[test]
    fn test_known_counts_branch_and_bound() {
        for (n, expected) in KNOWN_COUNTS {
            let result = QueensRunner::run(n, &config(Strategy::BranchAndBound)).unwrap();
            assert_eq!(result.count, expected, "n = {n}");
            assert_eq!(result.solutions.len() as u64, expected, "n = {n}");
        }
    }

    #[test]
    fn test_known_counts_backtracking() {
        for (n, expected) in KNOWN_COUNTS {
            let result = QueensRunner::run(n, &config(Strategy::Backtracking)).unwrap();
            assert_eq!(result.count, expected, "n = {n}");
        }
    }

    #[test]
    fn test_strategies_agree() {
        for n in 0..=8 {
            let scan = QueensRunner::run(n, &config(Strategy::Backtracking)).unwrap();
            let sets = QueensRunner::run(n, &config(Strategy::BranchAndBound)).unwrap();
            assert_eq!(scan, sets, "n = {n}");
        }
    }

    #[test]
    fn test_empty_board_has_one_solution() {
        let result = QueensRunner::run(0, &QueensConfig::default()).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.solutions, vec![Placement::new(vec![])]);
        assert_eq!(result.placements, 0);
    }

    #[test]
    fn test_four_queens_solutions_in_order() {
        let result = QueensRunner::run(4, &QueensConfig::default()).unwrap();
        assert_eq!(
            result.solutions,
            vec![
                Placement::new(vec![1, 3, 0, 2]),
                Placement::new(vec![2, 0, 3, 1]),
            ]
        );
    }

    #[test]
    fn test_unsolvable_sizes_terminate() {
        for n in [2, 3] {
            let result = QueensRunner::run(n, &QueensConfig::default()).unwrap();
            assert_eq!(result.count, 0);
            assert!(result.solutions.is_empty());
            assert!(result.placements > 0);
        }
    }

    #[test]
    fn test_solutions_distinct_and_valid() {
        let result = QueensRunner::run(8, &QueensConfig::default()).unwrap();
        let unique: HashSet<&Placement> = result.solutions.iter().collect();
        assert_eq!(unique.len(), 92);
        for p in &result.solutions {
            assert_eq!(p.len(), 8);
            assert!(p.is_valid(), "invalid placement {:?}", p.columns());
        }
        let mut sorted = result.solutions.clone();
        sorted.sort();
        assert_eq!(sorted, result.solutions);
    }

    #[test]
    fn test_count_only_skips_solutions() {
        let config = QueensConfig::default().with_collect_solutions(false);
        let result = QueensRunner::run(8, &config).unwrap();
        assert_eq!(result.count, 92);
        assert!(result.solutions.is_empty());
        assert_eq!(QueensRunner::count(8, Strategy::Backtracking), Ok(92));
    }

    #[test]
    fn test_parallel_flag_matches_sequential() {
        // Without the `parallel` feature the flag is ignored; with it the
        // split search must reproduce the sequential output exactly.
        for n in [0, 1, 4, 6, 8] {
            let sequential = QueensRunner::run(n, &QueensConfig::default()).unwrap();
            let parallel =
                QueensRunner::run(n, &QueensConfig::default().with_parallel(true)).unwrap();
            assert_eq!(sequential, parallel, "n = {n}");
        }
    }

    #[test]
    fn test_board_size_limit() {
        let config = QueensConfig::default().with_max_board_size(6);
        assert!(QueensRunner::run(6, &config).is_ok());
        assert_eq!(
            QueensRunner::run(7, &config),
            Err(SearchError::InvalidBoardSize { input: "7".into() })
        );
    }

    #[test]
    fn test_default_size_cap() {
        let config = QueensConfig::default().with_collect_solutions(false);
        assert_eq!(
            QueensRunner::run(17, &config),
            Err(SearchError::InvalidBoardSize { input: "17".into() })
        );
        assert_eq!(QueensRunner::count(10, Strategy::BranchAndBound), Ok(724));
    }

    #[test]
    fn test_idempotent() {
        let config = QueensConfig::default();
        let a = QueensRunner::run(7, &config).unwrap();
        let b = QueensRunner::run(7, &config).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_every_solution_is_valid(n in 0usize..9, backtracking in any::<bool>()) {
            let strategy = if backtracking {
                Strategy::Backtracking
            } else {
                Strategy::BranchAndBound
            };
            let result = QueensRunner::run(n, &config(strategy)).unwrap();
            prop_assert_eq!(result.count, result.solutions.len() as u64);
            for p in &result.solutions {
                prop_assert_eq!(p.len(), n);
                prop_assert!(p.is_valid());
            }
        }
    }
}
