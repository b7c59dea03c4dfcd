//! N-Queens configuration and board-size validation.

use crate::error::SearchError;

/// How the solver decides whether a square is attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Re-scan the column and both upward diagonals of the board on every
    /// check (O(N) per check).
    Backtracking,
    /// Keep column and diagonal occupancy trackers up to date while placing
    /// and removing queens (O(1) per check).
    #[default]
    BranchAndBound,
}

/// Configuration for [`QueensRunner`](super::QueensRunner).
///
/// # Examples
///
/// ```
/// use u_search::queens::{QueensConfig, Strategy};
///
/// let config = QueensConfig::default()
///     .with_strategy(Strategy::Backtracking)
///     .with_collect_solutions(false);
/// assert_eq!(config.strategy, Strategy::Backtracking);
/// assert!(!config.collect_solutions);
/// ```
#[derive(Debug, Clone)]
pub struct QueensConfig {
    pub strategy: Strategy,
    /// Keep every solution, not just the count.
    pub collect_solutions: bool,
    /// Split the search over the first-row columns on rayon's thread pool.
    ///
    /// Only honored with the `parallel` feature; output is identical to a
    /// sequential run.
    pub parallel: bool,
    /// Largest board accepted. Larger sizes are rejected as invalid input.
    ///
    /// Full enumeration grows roughly factorially; 16 (14,772,512
    /// solutions) still completes in seconds.
    pub max_board_size: usize,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            collect_solutions: true,
            parallel: false,
            max_board_size: 16,
        }
    }
}

impl QueensConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_collect_solutions(mut self, collect: bool) -> Self {
        self.collect_solutions = collect;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_board_size(mut self, n: usize) -> Self {
        self.max_board_size = n;
        self
    }
}

/// Parses a board size typed by a user.
///
/// ```
/// use u_search::queens::parse_board_size;
///
/// assert_eq!(parse_board_size(" 8 "), Ok(8));
/// assert!(parse_board_size("-1").is_err());
/// assert!(parse_board_size("2.5").is_err());
/// ```
pub fn parse_board_size(input: &str) -> Result<usize, SearchError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| SearchError::InvalidBoardSize {
            input: input.to_string(),
        })
}

/// Converts a signed size from a foreign boundary (e.g. JavaScript).
pub fn board_size_from_i64(n: i64) -> Result<usize, SearchError> {
    usize::try_from(n).map_err(|_| SearchError::InvalidBoardSize {
        input: n.to_string(),
    })
}
