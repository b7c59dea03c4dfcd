//! A* execution engine.
//!
//! # Algorithm
//!
//! 1. Push the start node (depth 0, f = h(start)) onto the frontier
//! 2. Pop the node with the lowest f-cost (FIFO among equal costs)
//!    a. Already expanded: discard it (lazy deletion)
//!    b. Expansion budget spent: stop with `LimitExceeded`
//!    c. Mark it expanded; if it is the goal, rebuild the path and stop
//!    d. Push every passable, unexpanded neighbor (down, left, up, right)
//!       with depth + 1 and f = depth + 1 + h
//! 3. Frontier empty: stop with `Unreachable`
//!
//! # Reference
//!
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths", *IEEE Trans. SSC* 4(2), 100-107.

use std::collections::HashSet;
use std::iter::FusedIterator;

use super::config::{AStarConfig, Heuristic};
use super::types::{Frontier, NodeArena, NodeId, SearchNode};
use crate::error::SearchError;
use crate::grid::{Coord, Grid};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The goal was expanded; `path` holds a shortest path.
    Found,
    /// The frontier ran dry; the goal cannot be reached from the start.
    Unreachable,
    /// The expansion budget ran out before the search finished.
    LimitExceeded,
}

/// Result of an A* run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AStarResult {
    pub status: SearchStatus,
    /// Start-to-goal coordinates, empty unless `status` is `Found`.
    pub path: Vec<Coord>,
    /// Expanded coordinates in expansion order.
    pub visited: Vec<Coord>,
    /// Number of nodes expanded (equals `visited.len()`).
    pub expansions: usize,
    /// Number of nodes pushed onto the frontier, including the start.
    pub generated: usize,
    /// Stale frontier entries popped for an already expanded cell.
    pub discarded: usize,
}

impl AStarResult {
    pub fn found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    pub fn exceeded_limit(&self) -> bool {
        self.status == SearchStatus::LimitExceeded
    }

    /// Number of moves on the path, or `None` when no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.found().then(|| self.path.len() - 1)
    }

    /// Expanded coordinates as a set.
    pub fn visited_set(&self) -> HashSet<Coord> {
        self.visited.iter().copied().collect()
    }
}

/// State after one expansion, as yielded by [`Snapshots`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// 1-based expansion counter.
    pub expansion: usize,
    pub coord: Coord,
    pub depth: usize,
    pub estimated_cost: usize,
    /// Frontier entries pending after this expansion, stale ones included.
    pub frontier_size: usize,
    /// Every coordinate expanded so far, this one last.
    pub visited: Vec<Coord>,
}

enum Step {
    Expanded(NodeId),
    Finished,
}

/// Mutable context of one search call.
struct Search<'g> {
    grid: &'g Grid,
    goal: Coord,
    heuristic: Heuristic,
    max_expansions: Option<usize>,
    arena: NodeArena,
    frontier: Frontier,
    expanded: Vec<bool>,
    order: Vec<Coord>,
    discarded: usize,
    goal_node: Option<NodeId>,
    finished: Option<SearchStatus>,
}

impl<'g> Search<'g> {
    fn new(grid: &'g Grid, start: Coord, goal: Coord, config: &AStarConfig) -> Self {
        let mut search = Self {
            grid,
            goal,
            heuristic: config.heuristic,
            max_expansions: config.max_expansions,
            arena: NodeArena::default(),
            frontier: Frontier::default(),
            expanded: vec![false; grid.len()],
            order: Vec::new(),
            discarded: 0,
            goal_node: None,
            finished: None,
        };
        search.discover(start, 0, None);
        search
    }

    fn slot(&self, coord: Coord) -> usize {
        self.grid.row_major(coord)
    }

    fn discover(&mut self, coord: Coord, depth: usize, parent: Option<NodeId>) {
        let estimated_cost = depth + self.heuristic.estimate(coord, self.goal);
        let id = self.arena.push(SearchNode {
            coord,
            depth,
            estimated_cost,
            parent,
        });
        self.frontier.push(id, estimated_cost);
    }

    fn finish(&mut self, status: SearchStatus) -> Step {
        self.finished = Some(status);
        Step::Finished
    }

    /// Advances to the next expansion or to the end of the search.
    fn step(&mut self) -> Step {
        if self.finished.is_some() {
            return Step::Finished;
        }
        if self.goal_node.is_some() {
            return self.finish(SearchStatus::Found);
        }

        loop {
            let Some(id) = self.frontier.pop() else {
                return self.finish(SearchStatus::Unreachable);
            };
            let node = *self.arena.get(id);
            let slot = self.slot(node.coord);

            if self.expanded[slot] {
                self.discarded += 1;
                continue;
            }
            if self.max_expansions == Some(self.order.len()) {
                return self.finish(SearchStatus::LimitExceeded);
            }

            self.expanded[slot] = true;
            self.order.push(node.coord);

            if node.coord == self.goal {
                self.goal_node = Some(id);
                return Step::Expanded(id);
            }

            let grid = self.grid;
            for next in grid.neighbors(node.coord) {
                if grid.is_passable(next) && !self.expanded[self.slot(next)] {
                    self.discover(next, node.depth + 1, Some(id));
                }
            }
            return Step::Expanded(id);
        }
    }

    fn run_to_end(&mut self) {
        while let Step::Expanded(_) = self.step() {}
    }

    fn result(&self) -> AStarResult {
        let status = self.finished.unwrap_or(SearchStatus::Unreachable);
        let path = match (status, self.goal_node) {
            (SearchStatus::Found, Some(id)) => self.arena.path_to(id),
            _ => Vec::new(),
        };
        AStarResult {
            status,
            path,
            visited: self.order.clone(),
            expansions: self.order.len(),
            generated: self.arena.len(),
            discarded: self.discarded,
        }
    }
}

/// Lazy, single-pass stream of [`Snapshot`]s, one per expansion.
///
/// Created by [`AStarRunner::snapshots`]. Once the iterator returns `None`
/// the final result is available from [`Snapshots::outcome`].
pub struct Snapshots<'g> {
    search: Search<'g>,
}

impl Snapshots<'_> {
    /// Final result, or `None` while the search is still in progress.
    pub fn outcome(&self) -> Option<AStarResult> {
        self.search.finished.map(|_| self.search.result())
    }

    /// Drains the remaining expansions and returns the final result.
    pub fn finish(mut self) -> AStarResult {
        self.search.run_to_end();
        self.search.result()
    }
}

impl Iterator for Snapshots<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        match self.search.step() {
            Step::Expanded(id) => {
                let node = self.search.arena.get(id);
                Some(Snapshot {
                    expansion: self.search.order.len(),
                    coord: node.coord,
                    depth: node.depth,
                    estimated_cost: node.estimated_cost,
                    frontier_size: self.search.frontier.len(),
                    visited: self.search.order.clone(),
                })
            }
            Step::Finished => None,
        }
    }
}

impl FusedIterator for Snapshots<'_> {}

/// A* grid search runner.
pub struct AStarRunner;

impl AStarRunner {
    /// Searches from the grid's `S` cell to its `G` cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::astar::{AStarConfig, AStarRunner};
    /// use u_search::grid::Grid;
    ///
    /// let grid: Grid = "S.#\n#..\n#.G".parse().unwrap();
    /// let result = AStarRunner::run(&grid, &AStarConfig::default()).unwrap();
    /// assert!(result.found());
    /// assert_eq!(result.steps(), Some(4));
    /// ```
    pub fn run(grid: &Grid, config: &AStarConfig) -> Result<AStarResult, SearchError> {
        Self::search(grid, grid.start(), grid.goal(), config)
    }

    /// Searches between arbitrary passable cells of `grid`.
    pub fn search(
        grid: &Grid,
        start: Coord,
        goal: Coord,
        config: &AStarConfig,
    ) -> Result<AStarResult, SearchError> {
        config.validate()?;
        grid.check_endpoint(start)?;
        grid.check_endpoint(goal)?;

        let mut search = Search::new(grid, start, goal, config);
        search.run_to_end();
        Ok(search.result())
    }

    /// Same search as [`AStarRunner::run`], exposed one expansion at a time.
    pub fn snapshots<'g>(grid: &'g Grid, config: &AStarConfig) -> Result<Snapshots<'g>, SearchError> {
        config.validate()?;
        grid.check_endpoint(grid.start())?;
        grid.check_endpoint(grid.goal())?;

        Ok(Snapshots {
            search: Search::new(grid, grid.start(), grid.goal(), config),
        })
    }
}
