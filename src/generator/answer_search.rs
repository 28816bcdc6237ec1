/*
answer_search.rs

Copyright 2025 Hervé Quatremain

This file is part of Linegame.

Linegame is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Linegame is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Linegame. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Exhaustive search of the solutions of a grid.
//!
//! The search is a depth-first walk from the start cell over the four neighbors of each cell.
//! Each candidate move works on its own copy of the visited cells and of the partial path, so
//! sibling branches never see each other's marks and nothing has to be undone on the way back.
//!
//! The whole tree is explored: every full-coverage path that respects the waypoint order is
//! returned, in the order they are found.
//! The neighbors are tried in the [`Direction::SEARCH_ORDER`] order, which decides which
//! solution comes first.
//! There is no memoization; the cost is exponential in the number of free cells, which is fine
//! for puzzle-sized grids generated offline.

use log::debug;
use std::time::Instant;

use super::cell::{Cell, Direction};
use super::grid::Grid;
use super::path::Path;

/// [`AnswerSearch`] object.
pub struct AnswerSearch<'a> {
    /// Grid to solve.
    grid: &'a Grid,

    /// Accepted paths, in discovery order.
    answers: Vec<Path>,

    /// Number of visited search nodes during the last search.
    pub iteration: usize,

    /// Duration in seconds of the last search.
    pub duration: f32,
}

impl<'a> AnswerSearch<'a> {
    /// Create the object.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            answers: Vec::new(),
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Search all the solutions of the grid.
    ///
    /// An empty list is a normal result: the grid has no solution.
    pub fn search(&mut self) -> Vec<Path> {
        let start: Instant = Instant::now();
        let n: usize = self.grid.field_size();
        self.iteration = 0;
        self.answers.clear();

        // Blockers are never part of a path: mark them visited from the beginning
        let mut visited: Vec<Vec<bool>> = vec![vec![false; n]; n];
        for b in self.grid.blockers() {
            visited[b.x][b.y] = true;
        }
        visited[self.grid.start().x][self.grid.start().y] = true;

        let mut path: Path = Path::new(self.grid.free_cell_count());
        path.push(self.grid.start());

        self.find_paths(&visited, &path, self.grid.start(), 1, 0);

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Answers = {}  Iterations = {}  Duration = {}",
            self.answers.len(),
            self.iteration,
            self.duration
        );
        std::mem::take(&mut self.answers)
    }

    /// Recursively explore the paths from the current cell.
    ///
    /// `visited` and `path` already include `current`.
    fn find_paths(
        &mut self,
        visited: &[Vec<bool>],
        path: &Path,
        current: Cell,
        visited_count: usize,
        visited_waypoints: usize,
    ) {
        self.iteration += 1;
        let free_cells: usize = self.grid.free_cell_count();

        if current == self.grid.end() {
            if visited_count == free_cells {
                debug!("    Found a path of {} cells", path.len());
                self.answers.push(path.clone());
            }
            return;
        }
        if visited_count == free_cells {
            return;
        }

        for d in Direction::SEARCH_ORDER {
            let next: Cell = match current.step(d, self.grid.field_size()) {
                Some(c) => c,
                None => continue,
            };
            if visited[next.x][next.y] {
                continue;
            }

            // A waypoint reached out of order disqualifies the whole node
            let mut next_waypoints: usize = visited_waypoints;
            if let Some(i) = self.grid.waypoint_index(&next) {
                if i != visited_waypoints {
                    debug!("    Back: waypoint {next} reached out of order from {current}");
                    return;
                }
                next_waypoints += 1;
            }

            let mut new_visited: Vec<Vec<bool>> = visited.to_vec();
            new_visited[next.x][next.y] = true;
            let mut new_path: Path = path.clone();
            new_path.push(next);

            self.find_paths(
                &new_visited,
                &new_path,
                next,
                visited_count + 1,
                next_waypoints,
            );
        }
    }
}

/// Return all the solutions of the grid.
pub fn search_answers(grid: &Grid) -> Vec<Path> {
    AnswerSearch::new(grid).search()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn c(x: usize, y: usize) -> Cell {
        Cell::new(x, y)
    }

    fn assert_full_coverage(grid: &Grid, path: &Path) {
        assert_eq!(path.len(), grid.free_cell_count());
        assert_eq!(path.get_first(), Some(grid.start()));
        assert_eq!(path.get_last(), Some(grid.end()));
        let cells: HashSet<Cell> = path.get().iter().copied().collect();
        assert_eq!(cells.len(), path.len());
        assert!(path.get().iter().all(|c| !grid.is_blocker(c)));
        assert_eq!(path.moves().len(), path.len() - 1);
    }

    #[test]
    fn open_field() {
        let grid: Grid = Grid::new(4, c(0, 0), c(3, 2), vec![], vec![]).unwrap();
        let answers: Vec<Path> = search_answers(&grid);
        assert!(!answers.is_empty());
        for p in &answers {
            assert_eq!(p.len(), 16);
            assert_full_coverage(&grid, p);
        }
    }

    #[test]
    fn waypoints_in_order() {
        let order: Vec<Cell> = vec![c(2, 0), c(0, 2)];
        let grid: Grid = Grid::new(4, c(0, 0), c(3, 2), order.clone(), vec![]).unwrap();
        let answers: Vec<Path> = search_answers(&grid);
        assert!(!answers.is_empty());
        for p in &answers {
            assert_full_coverage(&grid, p);
            let seen: Vec<Cell> = p
                .get()
                .iter()
                .filter(|c| order.contains(c))
                .copied()
                .collect();
            assert_eq!(seen, order);
        }
    }

    #[test]
    fn blockers_are_avoided() {
        let grid: Grid =
            Grid::new(4, c(2, 3), c(3, 3), vec![], vec![c(1, 1), c(1, 2)]).unwrap();
        let answers: Vec<Path> = search_answers(&grid);
        assert!(!answers.is_empty());
        for p in &answers {
            assert_eq!(p.len(), 14);
            assert!(!p.contains(&c(1, 1)));
            assert!(!p.contains(&c(1, 2)));
            assert_full_coverage(&grid, p);
        }
    }

    #[test]
    fn first_answer_follows_search_order() {
        // On a 2x2 field from (0, 0) to (1, 0), the only path goes down first
        let grid: Grid = Grid::new(2, c(0, 0), c(1, 0), vec![], vec![]).unwrap();
        let answers: Vec<Path> = search_answers(&grid);
        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers[0].get(),
            &[c(0, 0), c(0, 1), c(1, 1), c(1, 0)]
        );
    }

    #[test]
    fn all_answers_are_distinct() {
        let grid: Grid = Grid::new(3, c(0, 0), c(2, 2), vec![], vec![]).unwrap();
        let answers: Vec<Path> = search_answers(&grid);
        // At least the two snakes, by rows and by columns
        assert!(answers.len() >= 2);
        for (i, p) in answers.iter().enumerate() {
            assert_full_coverage(&grid, p);
            assert!(!answers[i + 1..].contains(p));
        }
    }

    #[test]
    fn unsolvable_grid() {
        // Start and end on the same color of a 3x3 checkerboard with the center blocked: a path
        // of 8 cells must start and end on different colors
        let grid: Grid = Grid::new(3, c(0, 0), c(2, 0), vec![], vec![c(1, 1)]).unwrap();
        assert!(search_answers(&grid).is_empty());
    }

    #[test]
    fn statistics() {
        let grid: Grid = Grid::new(3, c(0, 0), c(2, 2), vec![], vec![]).unwrap();
        let mut search: AnswerSearch = AnswerSearch::new(&grid);
        let answers: Vec<Path> = search.search();
        assert!(!answers.is_empty());
        assert!(search.iteration > answers.len());
    }
}
