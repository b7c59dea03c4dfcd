//! JavaScript bindings (`wasm` feature).
//!
//! ```js
//! const maze = searchPath("S..#G\n##.#.\n.....\n###.#\n.....", 1000);
//! // { found: true, exceededLimit: false, path: [{row: 0, col: 0}, ...], ... }
//! const queens = solveQueens(8, false);
//! // { count: 92, solutions: [] }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::astar::{AStarConfig, AStarResult, AStarRunner};
use crate::grid::{Coord, Grid};
use crate::queens::{board_size_from_i64, QueensConfig, QueensResult, QueensRunner};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PathView {
    found: bool,
    exceeded_limit: bool,
    path: Vec<Coord>,
    visited: Vec<Coord>,
    expansions: usize,
}

impl From<AStarResult> for PathView {
    fn from(result: AStarResult) -> Self {
        Self {
            found: result.found(),
            exceeded_limit: result.exceeded_limit(),
            path: result.path,
            visited: result.visited,
            expansions: result.expansions,
        }
    }
}

#[derive(Serialize)]
struct QueensView {
    count: u64,
    solutions: Vec<Vec<usize>>,
}

impl From<QueensResult> for QueensView {
    fn from(result: QueensResult) -> Self {
        Self {
            count: result.count,
            solutions: result
                .solutions
                .iter()
                .map(|p| p.columns().to_vec())
                .collect(),
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Runs A* on a grid in marker format.
#[wasm_bindgen(js_name = searchPath)]
pub fn search_path(grid: &str, max_expansions: Option<u32>) -> Result<JsValue, JsError> {
    let grid: Grid = grid.parse()?;
    let config = match max_expansions {
        Some(n) => AStarConfig::default().with_max_expansions(n as usize),
        None => AStarConfig::default(),
    };
    let result = AStarRunner::run(&grid, &config)?;
    to_js(&PathView::from(result))
}

/// Enumerates N-Queens solutions.
#[wasm_bindgen(js_name = solveQueens)]
pub fn solve_queens(n: i32, collect_solutions: bool) -> Result<JsValue, JsError> {
    let n = board_size_from_i64(i64::from(n))?;
    let config = QueensConfig::default().with_collect_solutions(collect_solutions);
    let result = QueensRunner::run(n, &config)?;
    to_js(&QueensView::from(result))
}
