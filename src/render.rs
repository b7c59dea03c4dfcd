//! Plain-text drawings of search state.
//!
//! Grid overlays use `P` for path cells, `V` for expanded cells and the
//! cell marker (`S`, `G`, `#`, `.`) otherwise. Boards use `Q` for queens and
//! `.` for empty squares. Cells are separated by single spaces and every
//! row ends with a newline.

use std::collections::HashSet;

use crate::grid::{Coord, Grid};
use crate::queens::Placement;

/// Draws `grid` with expanded cells and a path overlaid.
///
/// ```
/// use u_search::grid::{Coord, Grid};
/// use u_search::render::grid_overlay;
///
/// let grid: Grid = "S.G".parse().unwrap();
/// let drawn = grid_overlay(&grid, &[Coord::new(0, 0), Coord::new(0, 1)], &[]);
/// assert_eq!(drawn, "V V G\n");
/// ```
pub fn grid_overlay(grid: &Grid, visited: &[Coord], path: &[Coord]) -> String {
    let visited: HashSet<Coord> = visited.iter().copied().collect();
    let path: HashSet<Coord> = path.iter().copied().collect();

    let mut out = String::with_capacity(grid.len() * 2);
    for row in 0..grid.rows() {
        let line: Vec<char> = (0..grid.cols())
            .map(|col| {
                let here = Coord::new(row, col);
                if path.contains(&here) {
                    'P'
                } else if visited.contains(&here) {
                    'V'
                } else {
                    grid.get(here).map_or('?', |cell| cell.marker())
                }
            })
            .collect();
        push_row(&mut out, &line);
    }
    out
}

/// Draws a queen placement as an `n x n` board.
pub fn board(placement: &Placement) -> String {
    let n = placement.len();
    let mut out = String::with_capacity(n * n * 2);
    for &queen in placement.columns() {
        let line: Vec<char> = (0..n).map(|col| if col == queen { 'Q' } else { '.' }).collect();
        push_row(&mut out, &line);
    }
    out
}

fn push_row(out: &mut String, cells: &[char]) {
    for (i, ch) in cells.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*ch);
    }
    out.push('\n');
}
