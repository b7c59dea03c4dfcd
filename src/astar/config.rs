//! A* configuration.

use crate::error::SearchError;
use crate::grid::Coord;

/// Remaining-cost estimate used to order the frontier.
///
/// Both variants are admissible and consistent for 4-directional unit-cost
/// movement, so the first expansion of the goal yields a shortest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|r1 - r2| + |c1 - c2|`.
    #[default]
    Manhattan,
    /// Always zero: uniform-cost search. Expands more nodes than
    /// [`Heuristic::Manhattan`] but returns paths of the same length.
    Zero,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `goal`.
    pub fn estimate(self, from: Coord, goal: Coord) -> usize {
        match self {
            Heuristic::Manhattan => from.manhattan(goal),
            Heuristic::Zero => 0,
        }
    }
}

/// Configuration parameters for A* grid search.
///
/// # Examples
///
/// ```
/// use u_search::astar::{AStarConfig, Heuristic};
///
/// let config = AStarConfig::default()
///     .with_max_expansions(10_000)
///     .with_heuristic(Heuristic::Zero);
/// assert_eq!(config.max_expansions, Some(10_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AStarConfig {
    /// Stop with [`SearchStatus::LimitExceeded`](super::SearchStatus::LimitExceeded)
    /// after this many expansions. `None` searches until the goal is found
    /// or the frontier is exhausted.
    pub max_expansions: Option<usize>,
    /// Frontier ordering heuristic.
    pub heuristic: Heuristic,
}

impl AStarConfig {
    /// Sets the expansion budget.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Removes the expansion budget.
    pub fn without_limit(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max_expansions must be positive".into(),
            ));
        }
        Ok(())
    }
}
